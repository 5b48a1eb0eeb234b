//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use std::net::TcpListener;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub use mock_backend::{MockBackend, MockResponse};

/// A URL nothing is listening on.
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/", port)
}

/// Create a temporary config file pointing the `s3` endpoint at `endpoint`
/// and file output into `<temp dir>/out`.
pub fn temp_config(endpoint: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let out_dir = temp_dir.path().join("out");
    std::fs::create_dir(&out_dir).expect("Failed to create output dir");
    let config_path = temp_dir.path().join("config.toml");

    let content = format!(
        r#"[http]
timeout_seconds = 5
connect_timeout_seconds = 2

[s3]
endpoint = "{}"

[files]
dir = {}
prefix = "test-"
"#,
        endpoint,
        toml_path(&out_dir)
    );

    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Quote a path as a TOML literal string.
fn toml_path(path: &Path) -> String {
    format!("'{}'", path.display())
}

/// Output directory used by [`temp_config`].
pub fn out_dir(temp_dir: &TempDir) -> PathBuf {
    temp_dir.path().join("out")
}
