//! Literals shared by the parser and the generator.
//!
//! The parser recovers the project name from the intro sentence the generator
//! writes, so both sides build and match it from the pieces below.

/// File name searched for and written by every command.
pub const COMPLEXITY_FILE: &str = "COMPLEXITY.md";

/// Stored area for concepts without one.
pub const BLANK_AREA: &str = "___";

pub const DEFAULT_PROJECT_NAME: &str = "Project Name";

pub const TITLE: &str = "# Project Complexity & Knowledge Map";

pub const PROJECT_NAME_HINT: &str = "<!-- Replace {Project Name} with your project name -->";

/// Zero-based line index of the intro sentence.
pub const INTRO_LINE_INDEX: usize = 3;

pub const INTRO_PREFIX: &str = "A guide to what you need to know to work on ";

/// The parser only requires this suffix to start with `", broken"`.
pub const INTRO_SUFFIX: &str = ", broken into three tiers.";

pub const INTRO_TERMINATOR: &str = ", broken";

/// Matched against trimmed lines to locate the reference table.
pub const TABLE_HEADER_MARKER: &str = "| Topic | Area | Criticality";

pub const TABLE_HEADER: &str = "| Topic | Area | Criticality (1-3) |";

pub const TABLE_SEPARATOR: &str = "|---|---|---|";

pub const EMPTY_TABLE_ROW: &str = "| | | |";

/// First cell of the header row. A data row with this topic reads as a header.
pub const HEADER_TOPIC: &str = "Topic";

pub fn intro_sentence(project_name: &str) -> String {
    format!("{INTRO_PREFIX}{project_name}{INTRO_SUFFIX}")
}

/// Cell text with pipes escaped so they do not split the row.
pub fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

/// Split a table row on unescaped pipes, unescaping `\|` inside cells.
///
/// Cells are returned untrimmed, including the empty text before the leading
/// pipe and after the trailing one.
pub fn split_row(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '\\' if chars.peek() == Some(&'|') => {
                chars.next();
                current.push('|');
            }
            '|' => cells.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    cells.push(current);
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intro_sentence_layout() {
        assert_eq!(
            intro_sentence("loctree"),
            "A guide to what you need to know to work on loctree, broken into three tiers."
        );
    }

    #[test]
    fn test_table_header_starts_with_marker() {
        assert!(TABLE_HEADER.starts_with(TABLE_HEADER_MARKER));
        assert!(INTRO_SUFFIX.starts_with(INTRO_TERMINATOR));
    }

    #[test]
    fn test_escaped_pipe_stays_inside_cell() {
        let row = format!("| {} | {} | 2 |", escape_cell("C|D"), escape_cell("a|b"));
        assert_eq!(row, "| C\\|D | a\\|b | 2 |");
        assert_eq!(split_row(&row), vec!["", " C|D ", " a|b ", " 2 ", ""]);
    }

    #[test]
    fn test_backslash_before_escaped_pipe_survives() {
        let row = format!("| {} |", escape_cell(r"a\|b"));
        assert_eq!(split_row(&row), vec!["", r" a\|b ", ""]);
    }

    #[test]
    fn test_trailing_backslash_does_not_escape_separator() {
        assert_eq!(split_row(r"| dir\ | x |"), vec!["", r" dir\ ", " x ", ""]);
    }
}
