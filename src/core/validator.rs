//! Stateless predicates over a concept list.
//!
//! Topic and area comparisons ignore letter case.

use super::template::{BLANK_AREA, HEADER_TOPIC};
use super::Concept;

/// True if any existing concept already uses `topic`.
pub fn is_duplicate(topic: &str, existing: &[Concept]) -> bool {
    existing.iter().any(|c| c.matches_topic(topic))
}

/// True if `input` reads as a criticality level between 1 and 3.
pub fn is_valid_level(input: &str) -> bool {
    matches!(parse_level(input), Some(1..=3))
}

/// True for the blank sentinel or an area some concept already uses.
pub fn is_existing_area(area: &str, existing: &[Concept]) -> bool {
    if area.is_empty() || area == BLANK_AREA {
        return true;
    }
    let wanted = area.to_lowercase();
    existing.iter().any(|c| c.area.to_lowercase() == wanted)
}

/// True for the header word, which the table reader never returns as a concept.
pub fn is_reserved_topic(topic: &str) -> bool {
    topic == HEADER_TOPIC
}

/// Table rows are single lines.
pub fn has_line_break(text: &str) -> bool {
    text.contains(['\n', '\r'])
}

pub fn find_concept<'a>(topic: &str, concepts: &'a [Concept]) -> Option<&'a Concept> {
    concepts.iter().find(|c| c.matches_topic(topic))
}

/// Read the leading integer of `input`, ignoring surrounding whitespace and
/// anything after the digits (`"2 (often)"` reads as 2).
///
/// Returns `None` when there is no leading integer or it does not fit in a
/// `u8`; negative numbers are `None` as no level can be negative.
pub fn parse_level(input: &str) -> Option<u8> {
    let trimmed = input.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits: &str = {
        let end = unsigned
            .char_indices()
            .find(|(_, ch)| !ch.is_ascii_digit())
            .map_or(unsigned.len(), |(idx, _)| idx);
        &unsigned[..end]
    };

    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}
