//! Value resolvers.
//!
//! A resolver turns the raw argument of a binding (`name=RESOLVER:ARG`) into
//! the string substituted into the template. Resolvers may hit the network or
//! write files; they are the engine's only side effects.
//!
//! Built-ins:
//!
//! - `GET`: HTTP GET, body as text ([`HttpGet`]).
//! - `GETFILE`: HTTP GET, body written to a temp file, path returned.
//! - `s3`: object fetch by `bucket/key`, materialized like `GETFILE`.

mod error;
mod file;
mod http;
mod registry;
mod s3;

pub use error::ResolveError;
pub use file::TempFileStore;
pub use http::{build_client, HttpGet, HttpGetFile};
pub use registry::{ResolverEntry, ResolverRegistry};
pub use s3::{S3Fetch, S3ObjectId};

/// Pluggable value producer, keyed by id in a [`ResolverRegistry`].
pub trait Resolver {
    /// Produce the value for binding `name` from its raw argument.
    fn resolve(&self, name: &str, arg: &str) -> Result<String, ResolveError>;
}

impl<F> Resolver for F
where
    F: Fn(&str, &str) -> Result<String, ResolveError>,
{
    fn resolve(&self, name: &str, arg: &str) -> Result<String, ResolveError> {
        self(name, arg)
    }
}
