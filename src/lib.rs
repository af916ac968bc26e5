// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod formatting;
pub mod io;
pub mod prompt;
pub mod testkit;

// Re-export commonly used types
pub use crate::core::{
    calculate_stats, generate_markdown, parse_complexity_file, parse_document, sort_concepts,
    Concept, Criticality, Document, Stats,
};
pub use crate::errors::ComplexityError;
pub use crate::io::{find_complexity_file, FileSystem, RealFileSystem};
pub use crate::prompt::{Confirmer, TerminalConfirmer};
