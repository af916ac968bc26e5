use super::{require_concept, success_line, CommandContext, CommandReport};
use crate::core::Concept;
use crate::errors::ComplexityError;
use crate::formatting::OutputFormatter;

#[derive(Debug, Clone, Default)]
pub struct RemoveOptions {
    pub concept: String,
    /// Skip the confirmation prompt.
    pub force: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveReport {
    pub removed: Concept,
}

pub fn remove_concept(ctx: &CommandContext<'_>, options: &RemoveOptions) -> Result<RemoveReport, ComplexityError> {
    let (path, mut document) = ctx.load_document()?;
    let existing = require_concept(&options.concept, &document.concepts)?.clone();

    if !options.force {
        ctx.require_confirmation(&format!(
            "Remove \"{}\" (Level {}, Area: {})?",
            existing.topic, existing.criticality, existing.area
        ))?;
    }

    document.concepts.retain(|c| !c.matches_topic(&options.concept));
    ctx.save_document(&path, &document)?;

    Ok(RemoveReport { removed: existing })
}

impl CommandReport for RemoveReport {
    fn render(&self, formatter: &dyn OutputFormatter) -> String {
        success_line(formatter, &format!("Removed \"{}\"", self.removed.topic))
    }
}
