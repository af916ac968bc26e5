//! File access for COMPLEXITY.md.
//!
//! Commands never touch `std::fs` directly; they go through the
//! [`FileSystem`] capability so the whole parse, mutate and render cycle can
//! run against an in-memory file system in tests.

pub mod discovery;
pub mod real;
pub mod traits;

pub use discovery::{find_complexity_file, find_git_root, require_complexity_file};
pub use real::RealFileSystem;
pub use traits::FileSystem;
