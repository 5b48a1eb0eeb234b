use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub s3: S3Config,
    #[serde(default)]
    pub files: FilesConfig,
}

/// Settings for the HTTP client shared by `GET`, `GETFILE` and `s3`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Whole-request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
    /// `User-Agent` header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Object store settings for the `s3` resolver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct S3Config {
    /// Base URL; objects are fetched from `<endpoint>/<bucket>/<key>`.
    #[serde(default = "default_s3_endpoint")]
    pub endpoint: String,
}

/// Where file-producing resolvers put their output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilesConfig {
    /// Target directory. Falls back to the system temp dir.
    #[serde(default)]
    pub dir: Option<PathBuf>,
    /// File name prefix, followed by the binding name.
    #[serde(default = "default_file_prefix")]
    pub prefix: String,
}

impl FilesConfig {
    /// The configured directory, or the system temp dir.
    pub fn dir(&self) -> PathBuf {
        self.dir.clone().unwrap_or_else(std::env::temp_dir)
    }
}

fn default_timeout() -> u64 {
    30
}

fn default_connect_timeout() -> u64 {
    5
}

fn default_user_agent() -> String {
    format!("cloudstrap/{}", env!("CARGO_PKG_VERSION"))
}

fn default_s3_endpoint() -> String {
    "https://s3.amazonaws.com".to_string()
}

fn default_file_prefix() -> String {
    "cloudstrap-".to_string()
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for S3Config {
    fn default() -> Self {
        Self {
            endpoint: default_s3_endpoint(),
        }
    }
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            dir: None,
            prefix: default_file_prefix(),
        }
    }
}
