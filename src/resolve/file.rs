//! Byte-to-file materialization for resolvers that hand the child a path.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::resolve::ResolveError;

/// Writes resolved bytes to uniquely named files that outlive the launcher.
#[derive(Debug, Clone)]
pub struct TempFileStore {
    dir: PathBuf,
    prefix: String,
}

impl TempFileStore {
    pub fn new(dir: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            prefix: prefix.into(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Persist `bytes` as `<dir>/<prefix><name>-XXXXXX` and return the path.
    ///
    /// Path separators in `name` become `_`, so the file always lands in
    /// `dir`. The file is kept on disk; the launched program owns it from here on.
    pub fn materialize(&self, name: &str, bytes: &[u8]) -> Result<PathBuf, ResolveError> {
        let prefix = format!("{}{}-", self.prefix, name.replace(['/', '\\'], "_"));
        let mut file = tempfile::Builder::new()
            .prefix(&prefix)
            .tempfile_in(&self.dir)
            .map_err(|source| ResolveError::Io {
                path: self.dir.clone(),
                source,
            })?;

        file.write_all(bytes)
            .and_then(|()| file.flush())
            .map_err(|source| ResolveError::Io {
                path: file.path().to_path_buf(),
                source,
            })?;

        let (_, path) = file.keep().map_err(|e| ResolveError::Io {
            path: e.file.path().to_path_buf(),
            source: e.error,
        })?;

        tracing::debug!(path = %path.display(), bytes = bytes.len(), "Materialized resolver output");
        Ok(path)
    }
}
