//! I/O capability traits.

use crate::errors::ComplexityError;
use std::path::Path;

/// File system operations needed by the commands.
///
/// Paths handed to implementations are expected to be absolute; discovery
/// resolves the working directory before asking anything.
pub trait FileSystem: Send + Sync {
    /// Read a whole file as UTF-8.
    ///
    /// # Errors
    ///
    /// Returns `ComplexityError::Io` if the file is missing, unreadable, or
    /// not valid UTF-8.
    fn read_to_string(&self, path: &Path) -> Result<String, ComplexityError>;

    /// Replace the whole file with `content`, creating it if needed.
    fn write(&self, path: &Path, content: &str) -> Result<(), ComplexityError>;

    /// Check if a path exists (file or directory).
    fn exists(&self, path: &Path) -> bool;

    fn is_file(&self, path: &Path) -> bool;
}
