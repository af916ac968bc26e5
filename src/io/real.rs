//! Production [`FileSystem`] backed by `std::fs`.

use super::traits::FileSystem;
use crate::errors::ComplexityError;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

#[derive(Debug, Default, Clone)]
pub struct RealFileSystem;

impl RealFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String, ComplexityError> {
        fs::read_to_string(path)
            .map_err(|e| ComplexityError::io_with_path(format!("Failed to read file: {e}"), path, e))
    }

    /// Writes go to a sibling temp file that is then renamed over `path`, so
    /// an interrupted write never leaves a truncated COMPLEXITY.md behind.
    fn write(&self, path: &Path, content: &str) -> Result<(), ComplexityError> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut staged = NamedTempFile::new_in(dir).map_err(|e| {
            ComplexityError::io_with_path(format!("Failed to create temp file: {e}"), dir, e)
        })?;
        staged
            .write_all(content.as_bytes())
            .and_then(|()| staged.flush())
            .map_err(|e| ComplexityError::io_with_path(format!("Failed to write file: {e}"), path, e))?;
        staged.persist(path).map_err(|e| {
            ComplexityError::io_with_path(format!("Failed to replace file: {}", e.error), path, e.error)
        })?;

        tracing::debug!(path = %path.display(), bytes = content.len(), "wrote file");
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }
}
