//! In-memory stand-ins for the command capabilities.
//!
//! - [`MemoryFileSystem`]: a [`FileSystem`](crate::io::FileSystem) backed by a map
//! - [`ScriptedConfirmer`]: a [`Confirmer`](crate::prompt::Confirmer) that
//!   replays canned answers and records every question it was asked
//!
//! ```rust
//! use complexity_map::testkit::{MemoryFileSystem, ScriptedConfirmer};
//! use complexity_map::io::FileSystem;
//! use std::path::Path;
//!
//! let fs = MemoryFileSystem::new().with_file("/repo/COMPLEXITY.md", "# Map\n");
//! assert!(fs.exists(Path::new("/repo")));
//!
//! let confirmer = ScriptedConfirmer::answering([true]);
//! assert!(confirmer.prompts().is_empty());
//! ```

pub mod mock_env;

pub use mock_env::{MemoryFileSystem, ScriptedConfirmer};
