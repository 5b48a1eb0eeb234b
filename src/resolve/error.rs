use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by resolvers.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// HTTP client could not be constructed
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Transport-level failure talking to the remote
    #[error("GET {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Remote answered with a non-success status
    #[error("GET {url} returned status {status}")]
    Status { url: String, status: u16 },

    /// Materializing the value on disk failed
    #[error("failed to write '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The raw argument is not usable by this resolver
    #[error("invalid argument '{arg}': {reason}")]
    InvalidArgument { arg: String, reason: String },

    /// Free-form failure from a custom resolver
    #[error("{0}")]
    Other(String),
}
