//! Resolver registry: single source of truth for resolver ids.

use std::collections::BTreeMap;

use crate::config::Config;
use crate::resolve::{build_client, HttpGet, HttpGetFile, ResolveError, Resolver, S3Fetch, TempFileStore};

/// A registered resolver.
pub struct ResolverEntry {
    /// Human-readable description (for `--list-resolvers`).
    pub description: &'static str,
    pub resolver: Box<dyn Resolver>,
}

/// Immutable id → resolver table, built once at startup.
#[derive(Default)]
pub struct ResolverRegistry {
    entries: BTreeMap<String, ResolverEntry>,
}

impl ResolverRegistry {
    /// Start with an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `resolver` under `id`, replacing any previous entry.
    pub fn with(
        mut self,
        id: impl Into<String>,
        description: &'static str,
        resolver: impl Resolver + 'static,
    ) -> Self {
        self.entries.insert(
            id.into(),
            ResolverEntry {
                description,
                resolver: Box::new(resolver),
            },
        );
        self
    }

    /// The built-in resolvers, configured from `config`.
    pub fn builtin(config: &Config) -> Result<Self, ResolveError> {
        let client = build_client(&config.http)?;
        let store = TempFileStore::new(config.files.dir(), config.files.prefix.clone());

        Ok(Self::new()
            .with(
                "GET",
                "HTTP GET <url>, substitutes the response body",
                HttpGet::new(client.clone()),
            )
            .with(
                "GETFILE",
                "HTTP GET <url>, substitutes the path of a file holding the body",
                HttpGetFile::new(client.clone(), store.clone()),
            )
            .with(
                "s3",
                "fetch object <bucket>/<key>, substitutes the path of a file holding it",
                S3Fetch::new(client, config.s3.endpoint.clone(), store),
            ))
    }

    pub fn get(&self, id: &str) -> Option<&dyn Resolver> {
        self.entries.get(id).map(|entry| entry.resolver.as_ref())
    }

    /// Entries in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResolverEntry)> {
        self.entries.iter().map(|(id, entry)| (id.as_str(), entry))
    }

    /// Comma-separated ids, for error messages.
    pub fn available(&self) -> String {
        if self.entries.is_empty() {
            "(none)".to_string()
        } else {
            self.entries.keys().map(String::as_str).collect::<Vec<_>>().join(", ")
        }
    }
}
