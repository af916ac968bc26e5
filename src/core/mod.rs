//! Core data model and the markdown round-trip.
//!
//! A COMPLEXITY.md file is parsed into a [`Document`] on every command
//! invocation, mutated in memory, and regenerated in full. The reference table
//! is the only authoritative part of the file on read; the tier bullet lists
//! and the summary block are derived from it on every render.
//!
//! - [`parser`]: markdown text to [`Document`]
//! - [`generator`]: [`Document`] to canonical markdown
//! - [`validator`]: predicates used by the command layer
//! - [`template`]: literals shared by parser and generator

pub mod generator;
pub mod parser;
pub mod template;
pub mod validator;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use generator::{calculate_stats, generate_markdown, sort_concepts};
pub use parser::{parse_complexity_file, parse_document};
pub use validator::{
    find_concept, has_line_break, is_duplicate, is_existing_area, is_reserved_topic, is_valid_level,
    parse_level,
};

/// How essential a concept is to working on the project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Criticality {
    /// Comes up occasionally or can be learned on the job.
    Situational = 1,
    /// Encountered regularly; gaps slow you down.
    Important = 2,
    /// No meaningful work is possible without it.
    Critical = 3,
}

impl Criticality {
    /// All tiers, most critical first.
    pub const DESCENDING: [Criticality; 3] = [
        Criticality::Critical,
        Criticality::Important,
        Criticality::Situational,
    ];

    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(Self::Situational),
            2 => Some(Self::Important),
            3 => Some(Self::Critical),
            _ => None,
        }
    }

    pub const fn level(self) -> u8 {
        self as u8
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::Important => "Important",
            Self::Situational => "Situational",
        }
    }
}

impl fmt::Display for Criticality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.level())
    }
}

impl TryFrom<u8> for Criticality {
    type Error = String;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::from_level(level).ok_or_else(|| format!("criticality must be 1, 2, or 3 (got {level})"))
    }
}

impl From<Criticality> for u8 {
    fn from(criticality: Criticality) -> u8 {
        criticality.level()
    }
}

/// A named technology or skill listed in the knowledge map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Concept {
    pub topic: String,
    /// Free text, or [`template::BLANK_AREA`] when unassigned.
    pub area: String,
    pub criticality: Criticality,
}

impl Concept {
    pub fn new(topic: impl Into<String>, area: impl Into<String>, criticality: Criticality) -> Self {
        let area = area.into();
        Self {
            topic: topic.into(),
            area: if area.trim().is_empty() {
                template::BLANK_AREA.to_string()
            } else {
                area
            },
            criticality,
        }
    }

    pub fn has_blank_area(&self) -> bool {
        self.area == template::BLANK_AREA
    }

    pub fn matches_topic(&self, topic: &str) -> bool {
        self.topic.to_lowercase() == topic.to_lowercase()
    }
}

/// Parsed contents of a COMPLEXITY.md file.
///
/// Concepts are kept in file order. Display order is derived by
/// [`sort_concepts`] and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub project_name: String,
    pub concepts: Vec<Concept>,
}

impl Document {
    pub fn new(project_name: impl Into<String>, concepts: Vec<Concept>) -> Self {
        Self {
            project_name: project_name.into(),
            concepts,
        }
    }

    pub fn empty(project_name: impl Into<String>) -> Self {
        Self::new(project_name, Vec::new())
    }

    pub fn render(&self) -> String {
        generate_markdown(&self.project_name, &self.concepts)
    }

    pub fn stats(&self) -> Stats {
        calculate_stats(&self.concepts)
    }
}

/// Summary figures shown at the top of the generated file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub total_concepts: usize,
    /// Distinct areas, excluding the blank sentinel.
    pub total_areas: usize,
    pub critical_count: usize,
    pub important_count: usize,
    pub situational_count: usize,
}
