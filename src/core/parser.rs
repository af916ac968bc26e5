//! COMPLEXITY.md parsing.
//!
//! This is a convention-based reader, not a markdown parser: the project name
//! comes from a fixed line and the concepts come from the first table whose
//! header starts with [`TABLE_HEADER_MARKER`]. Rows that do not hold a topic,
//! an area and a criticality in 1..=3 are skipped without error.

use super::template::{
    split_row, BLANK_AREA, DEFAULT_PROJECT_NAME, HEADER_TOPIC, INTRO_LINE_INDEX, INTRO_PREFIX,
    INTRO_TERMINATOR, TABLE_HEADER_MARKER,
};
use super::validator::parse_level;
use super::{Concept, Criticality, Document};
use crate::errors::ComplexityError;
use crate::io::FileSystem;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

static INTRO_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        "{}(.+?){}",
        regex::escape(INTRO_PREFIX),
        regex::escape(INTRO_TERMINATOR)
    ))
    .expect("intro pattern is built from escaped literals")
});

/// Read and parse the file at `path`.
///
/// A missing file is an error; a file without a reference table parses to a
/// document with no concepts.
pub fn parse_complexity_file(fs: &dyn FileSystem, path: &Path) -> Result<Document, ComplexityError> {
    if !fs.exists(path) {
        return Err(ComplexityError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs.read_to_string(path)?;
    let document = parse_document(&content);
    tracing::debug!(
        path = %path.display(),
        project = %document.project_name,
        concepts = document.concepts.len(),
        "parsed complexity file"
    );
    Ok(document)
}

/// Pure parse of file contents.
pub fn parse_document(content: &str) -> Document {
    let lines: Vec<&str> = content.split('\n').collect();

    Document {
        project_name: extract_project_name(&lines),
        concepts: find_table_start(&lines)
            .map(|start| parse_table_rows(&lines[start..]))
            .unwrap_or_default(),
    }
}

fn extract_project_name(lines: &[&str]) -> String {
    lines
        .get(INTRO_LINE_INDEX)
        .and_then(|line| INTRO_PATTERN.captures(line))
        .and_then(|caps| caps.get(1))
        .map(|name| name.as_str().to_string())
        .unwrap_or_else(|| DEFAULT_PROJECT_NAME.to_string())
}

/// Index of the first data row: two lines past the header, skipping the
/// separator.
fn find_table_start(lines: &[&str]) -> Option<usize> {
    lines
        .iter()
        .position(|line| line.trim().starts_with(TABLE_HEADER_MARKER))
        .map(|header| header + 2)
        .filter(|start| *start <= lines.len())
}

fn parse_table_rows(lines: &[&str]) -> Vec<Concept> {
    lines
        .iter()
        .map(|line| line.trim())
        .take_while(|line| line.starts_with('|'))
        .filter_map(parse_table_row)
        .collect()
}

fn parse_table_row(line: &str) -> Option<Concept> {
    let cells: Vec<String> = split_row(line)
        .iter()
        .map(|cell| cell.trim())
        .filter(|cell| !cell.is_empty())
        .map(str::to_string)
        .collect();

    let [topic, area, level] = cells.as_slice() else {
        return None;
    };

    if topic == HEADER_TOPIC {
        return None;
    }

    let criticality = parse_level(level).and_then(Criticality::from_level)?;

    Some(Concept {
        topic: topic.clone(),
        area: if area.is_empty() {
            BLANK_AREA.to_string()
        } else {
            area.clone()
        },
        criticality,
    })
}
