use super::{CommandContext, CommandReport};
use crate::core::{sort_concepts, Concept, Criticality, Stats};
use crate::errors::ComplexityError;
use crate::formatting::OutputFormatter;
use clap::ValueEnum;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Grouped, colored listing
    #[default]
    Terminal,
    /// Machine-readable JSON
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListReport {
    pub project_name: String,
    pub file: PathBuf,
    pub stats: Stats,
    /// Display order: criticality descending, then topic.
    pub concepts: Vec<Concept>,
    #[serde(skip)]
    pub format: ListFormat,
}

pub fn list_concepts(ctx: &CommandContext<'_>, format: ListFormat) -> Result<ListReport, ComplexityError> {
    let (file, document) = ctx.load_document()?;

    Ok(ListReport {
        stats: document.stats(),
        concepts: sort_concepts(&document.concepts),
        project_name: document.project_name,
        file,
        format,
    })
}

impl ListReport {
    pub fn to_json(&self) -> Result<String, ComplexityError> {
        serde_json::to_string_pretty(self).map_err(|e| ComplexityError::Io {
            message: format!("Failed to serialize listing: {e}"),
            path: None,
            source: None,
        })
    }

    fn render_terminal(&self, formatter: &dyn OutputFormatter) -> String {
        if self.concepts.is_empty() {
            return [
                formatter.warning("No concepts found in COMPLEXITY.md"),
                formatter.dim(&format!("File location: {}", self.file.display())),
            ]
            .join("\n");
        }

        let mut lines = vec![
            String::new(),
            formatter.header(&format!("Project: {}", self.project_name)),
            formatter.dim(&format!("File: {}", self.file.display())),
            formatter.dim(&format!("Total concepts: {}", self.concepts.len())),
            String::new(),
        ];

        for tier in Criticality::DESCENDING {
            let group: Vec<&Concept> = self.concepts.iter().filter(|c| c.criticality == tier).collect();
            if group.is_empty() {
                continue;
            }

            lines.push(formatter.tier(
                tier.level(),
                &format!("{} (Level {}):", tier.label(), tier.level()),
            ));
            lines.extend(group.iter().map(|concept| {
                format!(
                    "  {} {}",
                    formatter.bold(&concept.topic),
                    formatter.dim(&format!("[{}]", concept.area))
                )
            }));
            lines.push(String::new());
        }

        lines.join("\n")
    }
}

impl CommandReport for ListReport {
    fn render(&self, formatter: &dyn OutputFormatter) -> String {
        match self.format {
            ListFormat::Terminal => self.render_terminal(formatter),
            ListFormat::Json => self
                .to_json()
                .unwrap_or_else(|e| formatter.error(&e.to_string())),
        }
    }
}
