//! Configuration for the built-in resolvers.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, FilesConfig, HttpConfig, S3Config};
