//! Object-store fetch by id.
//!
//! Objects are addressed as `bucket/key` (optionally `s3://bucket/key`) and
//! fetched from the configured endpoint with a path-style URL. The body is
//! materialized to a temp file and the path handed to the template.

use reqwest::blocking::Client;

use crate::resolve::http::fetch;
use crate::resolve::{ResolveError, Resolver, TempFileStore};

/// A parsed `bucket/key` object id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct S3ObjectId<'a> {
    pub bucket: &'a str,
    pub key: &'a str,
}

impl<'a> S3ObjectId<'a> {
    pub fn parse(id: &'a str) -> Result<Self, ResolveError> {
        let trimmed = id.strip_prefix("s3://").unwrap_or(id);
        match trimmed.split_once('/') {
            Some((bucket, key)) if !bucket.is_empty() && !key.is_empty() => {
                Ok(Self { bucket, key })
            }
            _ => Err(ResolveError::InvalidArgument {
                arg: id.to_string(),
                reason: "expected an object id of the form bucket/key".to_string(),
            }),
        }
    }

    /// Path-style URL of the object under `endpoint`.
    pub fn url(&self, endpoint: &str) -> String {
        format!("{}/{}/{}", endpoint.trim_end_matches('/'), self.bucket, self.key)
    }
}

/// `s3:<bucket>/<key>` resolver.
pub struct S3Fetch {
    client: Client,
    endpoint: String,
    store: TempFileStore,
}

impl S3Fetch {
    pub fn new(client: Client, endpoint: impl Into<String>, store: TempFileStore) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            store,
        }
    }
}

impl Resolver for S3Fetch {
    fn resolve(&self, name: &str, id: &str) -> Result<String, ResolveError> {
        let object = S3ObjectId::parse(id)?;
        let url = object.url(&self.endpoint);
        tracing::debug!(bucket = object.bucket, key = object.key, "Fetching object");

        let body = fetch(&self.client, &url)?;
        let path = self.store.materialize(name, &body)?;
        Ok(path.to_string_lossy().into_owned())
    }
}
