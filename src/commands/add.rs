use super::{success_line, validate_area, validate_level, validate_topic, CommandContext, CommandReport};
use crate::core::template::BLANK_AREA;
use crate::core::{validator, Concept};
use crate::errors::ComplexityError;
use crate::formatting::OutputFormatter;

const ADD_USAGE: &str = "complexity add <concept> <level> [area]\n   or: complexity add <concept> --level <level> [area]";

#[derive(Debug, Clone, Default)]
pub struct AddOptions {
    pub concept: String,
    /// Positional level.
    pub level: Option<String>,
    pub area: Option<String>,
    /// `--level`, takes precedence over the positional level.
    pub level_flag: Option<String>,
    /// Skip the new-area confirmation.
    pub force: bool,
}

impl AddOptions {
    /// Level input and area after resolving the positional/flag overlap.
    ///
    /// With `--level` given, a lone second positional is the area:
    /// `add Docker --level 3 devops`. Two positionals next to `--level` leave
    /// the level ambiguous.
    fn resolve(&self) -> Result<(Option<&str>, Option<&str>), ComplexityError> {
        match (&self.level_flag, &self.level, &self.area) {
            (Some(_), Some(_), Some(_)) => Err(ComplexityError::usage(
                "Give the level either positionally or with --level, not both.",
                ADD_USAGE,
            )),
            (Some(flag), Some(positional), None) => Ok((Some(flag.as_str()), Some(positional.as_str()))),
            (Some(flag), None, area) => Ok((Some(flag.as_str()), area.as_deref())),
            (None, level, area) => Ok((level.as_deref(), area.as_deref())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddReport {
    pub concept: Concept,
}

pub fn add_concept(ctx: &CommandContext<'_>, options: &AddOptions) -> Result<AddReport, ComplexityError> {
    let topic = options.concept.trim();
    if topic.is_empty() {
        return Err(ComplexityError::usage("Concept name is required.", ADD_USAGE));
    }

    validate_topic(topic)?;

    let (level_input, area_input) = options.resolve()?;
    let level_input =
        level_input.ok_or_else(|| ComplexityError::usage("Criticality level is required.", ADD_USAGE))?;
    let criticality = validate_level(level_input)?;
    let area = area_input
        .map(str::trim)
        .filter(|area| !area.is_empty())
        .unwrap_or(BLANK_AREA);
    validate_area(area)?;

    let (path, mut document) = ctx.load_document()?;

    if validator::is_duplicate(topic, &document.concepts) {
        return Err(ComplexityError::validation_with_hint(
            format!("Concept \"{topic}\" already exists."),
            "Use \"complexity update\" to modify it.",
        ));
    }
    ctx.confirm_new_area(area, &document.concepts, "add", options.force)?;

    let concept = Concept::new(topic, area, criticality);
    document.concepts.push(concept.clone());
    ctx.save_document(&path, &document)?;

    Ok(AddReport { concept })
}

impl CommandReport for AddReport {
    fn render(&self, formatter: &dyn OutputFormatter) -> String {
        success_line(
            formatter,
            &format!(
                "Added \"{}\" (Level {}, Area: {})",
                self.concept.topic, self.concept.criticality, self.concept.area
            ),
        )
    }
}
