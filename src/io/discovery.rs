//! Locating COMPLEXITY.md.
//!
//! The search walks up from the working directory and stops at the nearest
//! repository root (a directory holding `.git`), or at the filesystem root
//! when there is no repository.

use super::traits::FileSystem;
use crate::core::template::COMPLEXITY_FILE;
use crate::errors::ComplexityError;
use std::path::{Path, PathBuf};

/// Nearest ancestor of `start` (inclusive) containing `.git`.
///
/// The filesystem root itself is never treated as a repository root.
pub fn find_git_root(fs: &dyn FileSystem, start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .filter(|dir| dir.parent().is_some())
        .find(|dir| fs.exists(&dir.join(".git")))
        .map(Path::to_path_buf)
}

pub fn find_complexity_file(fs: &dyn FileSystem, start: &Path) -> Option<PathBuf> {
    let stop_at = find_git_root(fs, start);

    for dir in start.ancestors() {
        let candidate = dir.join(COMPLEXITY_FILE);
        if fs.exists(&candidate) {
            tracing::debug!(path = %candidate.display(), "found complexity file");
            return Some(candidate);
        }
        if stop_at.as_deref() == Some(dir) {
            break;
        }
    }

    tracing::debug!(
        start = %start.display(),
        stop_at = ?stop_at,
        "no complexity file found"
    );
    None
}

/// Like [`find_complexity_file`], but a miss is an error.
pub fn require_complexity_file(fs: &dyn FileSystem, start: &Path) -> Result<PathBuf, ComplexityError> {
    find_complexity_file(fs, start).ok_or_else(|| ComplexityError::NotFound {
        searched_from: start.to_path_buf(),
    })
}
