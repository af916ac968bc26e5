//! CLI command implementations.
//!
//! Every mutating command runs the same cycle: locate COMPLEXITY.md, parse
//! it, check preconditions, compute the new concept list, render, and write
//! the whole file back. Commands only talk to the outside world through the
//! capabilities in [`CommandContext`] and return a report value; printing is
//! left to the caller.
//!
//! Available commands:
//! - **add**: append a concept
//! - **update**: change a concept's level, area or name
//! - **remove**: delete a concept
//! - **list**: show concepts grouped by criticality
//! - **prompt**: print instructions for filling in the map
//! - **init**: create an empty COMPLEXITY.md

pub mod add;
pub mod init;
pub mod list;
pub mod prompt;
pub mod remove;
pub mod update;

pub use add::{add_concept, AddOptions, AddReport};
pub use init::{init_complexity_file, InitOptions, InitReport};
pub use list::{list_concepts, ListFormat, ListReport};
pub use prompt::{prompt_text, PromptReport};
pub use remove::{remove_concept, RemoveOptions, RemoveReport};
pub use update::{update_concept, UpdateOptions, UpdateReport};

use crate::config::ComplexityConfig;
use crate::core::template::BLANK_AREA;
use crate::core::{parse_complexity_file, validator, Concept, Document};
use crate::errors::ComplexityError;
use crate::formatting::OutputFormatter;
use crate::io::{require_complexity_file, FileSystem};
use crate::prompt::Confirmer;
use std::path::{Path, PathBuf};

/// Capabilities a command may use.
pub struct CommandContext<'a> {
    pub fs: &'a dyn FileSystem,
    pub confirmer: &'a dyn Confirmer,
    /// Absolute directory discovery starts from.
    pub cwd: PathBuf,
    pub config: ComplexityConfig,
}

impl<'a> CommandContext<'a> {
    pub fn new(fs: &'a dyn FileSystem, confirmer: &'a dyn Confirmer, cwd: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            confirmer,
            cwd: cwd.into(),
            config: ComplexityConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ComplexityConfig) -> Self {
        self.config = config;
        self
    }

    /// Find and parse COMPLEXITY.md.
    pub(crate) fn load_document(&self) -> Result<(PathBuf, Document), ComplexityError> {
        let path = require_complexity_file(self.fs, &self.cwd)?;
        let document = parse_complexity_file(self.fs, &path)?;
        Ok((path, document))
    }

    pub(crate) fn save_document(&self, path: &Path, document: &Document) -> Result<(), ComplexityError> {
        self.fs.write(path, &document.render())?;
        tracing::info!(
            path = %path.display(),
            concepts = document.concepts.len(),
            "regenerated complexity file"
        );
        Ok(())
    }

    /// Ask before introducing an area no concept uses yet.
    ///
    /// `verb` completes "Would you still like to {verb} it?".
    pub(crate) fn confirm_new_area(
        &self,
        area: &str,
        existing: &[Concept],
        verb: &str,
        force: bool,
    ) -> Result<(), ComplexityError> {
        if force || area == BLANK_AREA || validator::is_existing_area(area, existing) {
            return Ok(());
        }

        let question = format!("No pre-existing area \"{area}\" found. Would you still like to {verb} it?");
        self.require_confirmation(&question)
    }

    pub(crate) fn require_confirmation(&self, question: &str) -> Result<(), ComplexityError> {
        if self.confirmer.confirm(question)? {
            Ok(())
        } else {
            tracing::info!(prompt = question, "confirmation declined");
            Err(ComplexityError::Cancelled)
        }
    }
}

/// Result of a command, rendered for the console by the caller.
pub trait CommandReport {
    fn render(&self, formatter: &dyn OutputFormatter) -> String;
}

/// Existing concept by case-insensitive topic, or a not-found error.
pub(crate) fn require_concept<'d>(topic: &str, concepts: &'d [Concept]) -> Result<&'d Concept, ComplexityError> {
    validator::find_concept(topic, concepts)
        .ok_or_else(|| ComplexityError::validation(format!("Concept \"{topic}\" not found.")))
}

/// Level argument checked against the 1-3 range.
pub(crate) fn validate_level(input: &str) -> Result<crate::core::Criticality, ComplexityError> {
    validator::parse_level(input)
        .and_then(crate::core::Criticality::from_level)
        .ok_or_else(|| ComplexityError::validation("Level must be 1, 2, or 3."))
}

/// Topic that can be written to the table and read back.
pub(crate) fn validate_topic(topic: &str) -> Result<(), ComplexityError> {
    if validator::is_reserved_topic(topic) {
        return Err(ComplexityError::validation_with_hint(
            format!("Concept name \"{topic}\" is reserved for the table header."),
            "Pick a different name.",
        ));
    }
    if validator::has_line_break(topic) {
        return Err(ComplexityError::validation("Concept names cannot contain line breaks."));
    }
    Ok(())
}

pub(crate) fn validate_area(area: &str) -> Result<(), ComplexityError> {
    if validator::has_line_break(area) {
        return Err(ComplexityError::validation("Areas cannot contain line breaks."));
    }
    Ok(())
}

pub(crate) fn success_line(formatter: &dyn OutputFormatter, text: &str) -> String {
    formatter.success(&format!("{} {}", formatter.emoji("✓", "[OK]"), text))
}
