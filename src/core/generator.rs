//! Canonical COMPLEXITY.md rendering.
//!
//! Output is a pure function of the project name and the concept list: the
//! same input always yields byte-identical text, and parsing the result gives
//! back the same concepts.

use super::template::{
    escape_cell, intro_sentence, BLANK_AREA, EMPTY_TABLE_ROW, PROJECT_NAME_HINT, TABLE_HEADER,
    TABLE_SEPARATOR, TITLE,
};
use super::{Concept, Criticality, Stats};
use icu_collator::{Collator, CollatorBorrowed};
use std::cmp::Ordering;
use std::collections::HashSet;

pub fn calculate_stats(concepts: &[Concept]) -> Stats {
    let areas: HashSet<&str> = concepts
        .iter()
        .map(|c| c.area.as_str())
        .filter(|area| !area.is_empty() && *area != BLANK_AREA)
        .collect();
    let count = |tier: Criticality| concepts.iter().filter(|c| c.criticality == tier).count();

    Stats {
        total_concepts: concepts.len(),
        total_areas: areas.len(),
        critical_count: count(Criticality::Critical),
        important_count: count(Criticality::Important),
        situational_count: count(Criticality::Situational),
    }
}

/// Criticality descending, then topic ascending.
pub fn sort_concepts(concepts: &[Concept]) -> Vec<Concept> {
    let collator = topic_collator();
    let mut sorted = concepts.to_vec();
    sorted.sort_by(|a, b| {
        b.criticality
            .cmp(&a.criticality)
            .then_with(|| collate(collator.as_ref(), &a.topic, &b.topic))
    });
    sorted
}

/// Topic order under the root-locale collation. Accents and letter case only
/// break ties between otherwise equal words.
pub fn compare_topics(a: &str, b: &str) -> Ordering {
    collate(topic_collator().as_ref(), a, b)
}

fn topic_collator() -> Option<CollatorBorrowed<'static>> {
    Collator::try_new(Default::default(), Default::default())
        .map_err(|err| tracing::warn!(error = %err, "topic collation unavailable, sorting by code point"))
        .ok()
}

/// Strings the collator ranks equal still get a fixed order.
fn collate(collator: Option<&CollatorBorrowed<'static>>, a: &str, b: &str) -> Ordering {
    collator
        .map_or(Ordering::Equal, |collator| collator.compare(a, b))
        .then_with(|| a.cmp(b))
}

pub fn generate_markdown(project_name: &str, concepts: &[Concept]) -> String {
    let stats = calculate_stats(concepts);
    let sorted = sort_concepts(concepts);
    let mut lines: Vec<String> = Vec::new();

    lines.push(TITLE.to_string());
    lines.push(String::new());
    lines.push(PROJECT_NAME_HINT.to_string());
    lines.push(intro_sentence(project_name));
    lines.push(String::new());

    lines.extend(summary_lines(&stats));
    lines.push(String::new());
    lines.push("---".to_string());
    lines.push(String::new());

    for tier in Criticality::DESCENDING {
        let (heading, placeholder) = tier_section(tier);
        lines.push(heading.to_string());
        lines.push(String::new());

        let topics: Vec<String> = sorted
            .iter()
            .filter(|c| c.criticality == tier)
            .map(|c| format!("- {}", c.topic))
            .collect();
        if topics.is_empty() {
            lines.push(placeholder.to_string());
        } else {
            lines.extend(topics);
        }
        lines.push(String::new());
    }

    lines.push("---".to_string());
    lines.push(String::new());
    lines.push("## Full Reference".to_string());
    lines.push(String::new());
    lines.extend(CRITICALITY_SCALE.iter().map(|line| line.to_string()));
    lines.push(String::new());
    lines.push(TABLE_HEADER.to_string());
    lines.push(TABLE_SEPARATOR.to_string());

    if sorted.is_empty() {
        lines.push(EMPTY_TABLE_ROW.to_string());
    } else {
        lines.extend(
            sorted
                .iter()
                .map(|c| {
                    format!(
                        "| {} | {} | {} |",
                        escape_cell(&c.topic),
                        escape_cell(&c.area),
                        c.criticality
                    )
                }),
        );
    }
    lines.push(String::new());

    lines.join("\n")
}

const CRITICALITY_SCALE: [&str; 6] = [
    "<!--",
    "  Criticality scale:",
    "    3 = Can't do meaningful work without it",
    "    2 = Will encounter regularly; gaps will slow you down",
    "    1 = Comes up occasionally or is abstracted away enough to learn on the job",
    "-->",
];

fn summary_lines(stats: &Stats) -> [String; 4] {
    [
        format!(
            "> **{} technologies/concepts** across {} areas",
            stats.total_concepts, stats.total_areas
        ),
        format!("> **{} critical**", stats.critical_count),
        format!("> **{} important**", stats.important_count),
        format!("> **{} situational**", stats.situational_count),
    ]
}

fn tier_section(tier: Criticality) -> (&'static str, &'static str) {
    match tier {
        Criticality::Critical => (
            "## **What you NEED to know to do any meaningful work**",
            "<!-- Criticality 3 items from the table below -->",
        ),
        Criticality::Important => (
            "## **What you SHOULD know to be very helpful**",
            "<!-- Everything above, plus Criticality 2 items -->",
        ),
        Criticality::Situational => (
            "## **What you should EVENTUALLY learn for specific areas**",
            "<!-- Criticality 1 items -->",
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parser::parse_document;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    fn docker_and_jest() -> Vec<Concept> {
        vec![
            Concept::new("Jest", "testing", Criticality::Situational),
            Concept::new("Docker", "devops", Criticality::Critical),
        ]
    }

    #[test]
    fn test_stats_for_docker_and_jest() {
        let stats = calculate_stats(&docker_and_jest());
        assert_eq!(
            stats,
            Stats {
                total_concepts: 2,
                total_areas: 2,
                critical_count: 1,
                important_count: 0,
                situational_count: 1,
            }
        );
    }

    #[test]
    fn test_stats_exclude_blank_area() {
        let concepts = vec![
            Concept::new("A", BLANK_AREA, Criticality::Important),
            Concept::new("B", "web", Criticality::Important),
            Concept::new("C", "web", Criticality::Critical),
        ];
        assert_eq!(calculate_stats(&concepts).total_areas, 1);
    }

    #[test]
    fn test_sort_by_criticality_then_topic() {
        let concepts = vec![
            Concept::new("zod", "web", Criticality::Important),
            Concept::new("Jest", "testing", Criticality::Situational),
            Concept::new("axum", "web", Criticality::Important),
            Concept::new("Docker", "devops", Criticality::Critical),
            Concept::new("Bun", "web", Criticality::Important),
        ];
        let topics: Vec<String> = sort_concepts(&concepts).into_iter().map(|c| c.topic).collect();
        assert_eq!(topics, vec!["Docker", "axum", "Bun", "zod", "Jest"]);
    }

    #[test]
    fn test_compare_topics_case_tie_break() {
        assert_eq!(compare_topics("apple", "Apple"), Ordering::Less);
        assert_eq!(compare_topics("Apple", "apple"), Ordering::Greater);
        assert_eq!(compare_topics("apple", "apple"), Ordering::Equal);
        assert_eq!(compare_topics("app", "apple"), Ordering::Less);
    }

    #[test]
    fn test_sort_follows_dictionary_order() {
        let concepts: Vec<Concept> = ["Zig", "Élixir", "Go", "_internal", "{braces}", "9p", "eBPF"]
            .into_iter()
            .map(|topic| Concept::new(topic, "lang", Criticality::Important))
            .collect();
        let topics: Vec<String> = sort_concepts(&concepts).into_iter().map(|c| c.topic).collect();
        assert_eq!(
            topics,
            vec!["_internal", "{braces}", "9p", "eBPF", "Élixir", "Go", "Zig"]
        );
    }

    #[test]
    fn test_accent_only_breaks_ties() {
        assert_eq!(compare_topics("Élan", "Elbow"), Ordering::Less);
        assert_eq!(compare_topics("elan", "élan"), Ordering::Less);
    }

    #[test]
    fn test_pipes_in_cells_survive_round_trip() {
        let concepts = vec![
            Concept::new("C|D", "a|b", Criticality::Critical),
            Concept::new(r"path\to", "fs", Criticality::Situational),
        ];
        let markdown = generate_markdown("Acme", &concepts);
        assert!(markdown.contains("| C\\|D | a\\|b | 3 |"));
        assert_eq!(parse_document(&markdown).concepts, concepts);
    }

    #[test]
    fn test_generate_full_layout() {
        let markdown = generate_markdown("Acme", &docker_and_jest());
        let expected = indoc! {"
            # Project Complexity & Knowledge Map

            <!-- Replace {Project Name} with your project name -->
            A guide to what you need to know to work on Acme, broken into three tiers.

            > **2 technologies/concepts** across 2 areas
            > **1 critical**
            > **0 important**
            > **1 situational**

            ---

            ## **What you NEED to know to do any meaningful work**

            - Docker

            ## **What you SHOULD know to be very helpful**

            <!-- Everything above, plus Criticality 2 items -->

            ## **What you should EVENTUALLY learn for specific areas**

            - Jest

            ---

            ## Full Reference

            <!--
              Criticality scale:
                3 = Can't do meaningful work without it
                2 = Will encounter regularly; gaps will slow you down
                1 = Comes up occasionally or is abstracted away enough to learn on the job
            -->

            | Topic | Area | Criticality (1-3) |
            |---|---|---|
            | Docker | devops | 3 |
            | Jest | testing | 1 |
        "};
        assert_eq!(markdown, expected);
    }

    #[test]
    fn test_empty_document_uses_placeholders() {
        let markdown = generate_markdown("Acme", &[]);
        assert!(markdown.contains("<!-- Criticality 3 items from the table below -->"));
        assert!(markdown.contains("<!-- Criticality 1 items -->"));
        assert!(markdown.contains("|---|---|---|\n| | | |\n"));
        assert!(markdown.contains("> **0 technologies/concepts** across 0 areas"));
    }

    #[test]
    fn test_generation_is_idempotent() {
        let concepts = docker_and_jest();
        assert_eq!(
            generate_markdown("Acme", &concepts),
            generate_markdown("Acme", &concepts)
        );
    }

    #[test]
    fn test_regenerating_parsed_output_is_stable() {
        let first = generate_markdown("Acme API", &docker_and_jest());
        let parsed = parse_document(&first);
        assert_eq!(parsed.project_name, "Acme API");
        assert_eq!(generate_markdown(&parsed.project_name, &parsed.concepts), first);
    }
}
