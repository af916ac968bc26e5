//! Error taxonomy for complexity commands.
//!
//! Every command returns [`ComplexityError`] on failure. The binary maps each
//! variant to an exit code and a remediation line; nothing below the command
//! layer terminates the process.
//!
//! # Example
//!
//! ```rust
//! use complexity_map::errors::ComplexityError;
//!
//! let err = ComplexityError::validation("Level must be 1, 2, or 3.");
//! assert_eq!(err.exit_code(), 1);
//! assert_eq!(ComplexityError::Cancelled.exit_code(), 0);
//! ```

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ComplexityError {
    /// A required argument was missing or arguments were combined wrongly.
    #[error("{message}")]
    Usage { message: String, usage: String },

    /// Input was well-formed but rejected (bad level, duplicate, unknown concept).
    #[error("{message}")]
    Validation {
        message: String,
        hint: Option<String>,
    },

    /// The parser was pointed at a file that does not exist.
    #[error("COMPLEXITY.md not found at: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Discovery found no COMPLEXITY.md between the working directory and the
    /// repository root.
    #[error("COMPLEXITY.md not found.")]
    NotFound { searched_from: PathBuf },

    #[error("COMPLEXITY.md already exists at {}.", path.display())]
    AlreadyExists { path: PathBuf },

    #[error("{message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<io::Error>,
    },

    /// The user declined a confirmation prompt.
    #[error("Cancelled.")]
    Cancelled,
}

impl ComplexityError {
    pub fn usage(message: impl Into<String>, usage: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
            usage: usage.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            hint: None,
        }
    }

    pub fn validation_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    pub fn io_with_path(message: impl Into<String>, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            message: message.into(),
            path: Some(path.into()),
            source: Some(source),
        }
    }

    /// Process exit code for this outcome. Cancellation is not a failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Cancelled => 0,
            _ => 1,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Remediation line shown under the error message, if any.
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::Usage { usage, .. } => Some(format!("Usage: {usage}")),
            Self::Validation { hint, .. } => hint.clone(),
            Self::NotFound { .. } | Self::FileNotFound { .. } => {
                Some("Run \"complexity init\" to create one.".to_string())
            }
            Self::AlreadyExists { .. } => Some("Use --force to overwrite it.".to_string()),
            Self::Io { path: Some(path), .. } => {
                Some(format!("Path: {}", path.display()))
            }
            _ => None,
        }
    }
}
