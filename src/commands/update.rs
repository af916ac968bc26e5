use super::{
    require_concept, success_line, validate_area, validate_level, validate_topic, CommandContext, CommandReport,
};
use crate::core::{Concept, Criticality};
use crate::errors::ComplexityError;
use crate::formatting::OutputFormatter;

const UPDATE_USAGE: &str = "complexity update <concept> [--level <level>] [--area <area>] [--name <new-name>]";

#[derive(Debug, Clone, Default)]
pub struct UpdateOptions {
    pub concept: String,
    pub level: Option<String>,
    pub area: Option<String>,
    pub name: Option<String>,
    /// Skip the new-area confirmation.
    pub force: bool,
}

impl UpdateOptions {
    /// `--level ""` counts as not given.
    fn level_input(&self) -> Option<&str> {
        self.level.as_deref().map(str::trim).filter(|level| !level.is_empty())
    }

    fn new_name(&self) -> Option<&str> {
        self.name.as_deref().map(str::trim).filter(|name| !name.is_empty())
    }

    fn has_changes(&self) -> bool {
        self.level_input().is_some() || self.area.is_some() || self.new_name().is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateReport {
    /// Topic as it was before the update.
    pub previous_topic: String,
    pub updated: Concept,
    pub renamed: bool,
    pub level_changed: bool,
    pub area_changed: bool,
}

pub fn update_concept(ctx: &CommandContext<'_>, options: &UpdateOptions) -> Result<UpdateReport, ComplexityError> {
    if !options.has_changes() {
        return Err(ComplexityError::usage(
            "At least one option (--level, --area, or --name) is required.",
            UPDATE_USAGE,
        ));
    }
    let criticality: Option<Criticality> = options.level_input().map(validate_level).transpose()?;
    let new_name = options.new_name();
    if let Some(name) = new_name {
        validate_topic(name)?;
    }
    let new_area = options.area.as_deref().map(str::trim);
    if let Some(area) = new_area {
        validate_area(area)?;
    }

    let (path, mut document) = ctx.load_document()?;
    let existing = require_concept(&options.concept, &document.concepts)?.clone();

    if let Some(name) = new_name {
        let clash = document
            .concepts
            .iter()
            .any(|c| c.matches_topic(name) && !c.matches_topic(&existing.topic));
        if clash {
            return Err(ComplexityError::validation_with_hint(
                format!("Concept \"{name}\" already exists."),
                "Pick a different name or remove the existing concept first.",
            ));
        }
    }

    if let Some(area) = new_area {
        ctx.confirm_new_area(area, &document.concepts, "use", options.force)?;
    }

    let updated = Concept::new(
        new_name.unwrap_or(existing.topic.as_str()),
        new_area.unwrap_or(existing.area.as_str()),
        criticality.unwrap_or(existing.criticality),
    );

    for concept in document.concepts.iter_mut() {
        if concept.matches_topic(&existing.topic) {
            *concept = updated.clone();
        }
    }
    ctx.save_document(&path, &document)?;

    Ok(UpdateReport {
        previous_topic: existing.topic,
        renamed: new_name.is_some(),
        level_changed: criticality.is_some(),
        area_changed: new_area.is_some(),
        updated,
    })
}

impl CommandReport for UpdateReport {
    fn render(&self, formatter: &dyn OutputFormatter) -> String {
        let arrow = formatter.emoji("→", "->");
        let mut lines = vec![success_line(
            formatter,
            &format!("Updated \"{}\"", self.previous_topic),
        )];

        if self.renamed {
            lines.push(formatter.dim(&format!("  {arrow} Name: {}", self.updated.topic)));
        }
        if self.level_changed {
            lines.push(formatter.dim(&format!("  {arrow} Level: {}", self.updated.criticality)));
        }
        if self.area_changed {
            lines.push(formatter.dim(&format!("  {arrow} Area: {}", self.updated.area)));
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{generate_markdown, parse_document};
    use crate::formatting::PlainFormatter;
    use crate::testkit::{MemoryFileSystem, ScriptedConfirmer};
    use pretty_assertions::assert_eq;

    const FILE: &str = "/repo/COMPLEXITY.md";

    fn seeded_fs() -> MemoryFileSystem {
        let concepts = vec![
            Concept::new("Docker", "devops", Criticality::Critical),
            Concept::new("Jest", "testing", Criticality::Situational),
        ];
        MemoryFileSystem::new().with_file(FILE, generate_markdown("Acme", &concepts))
    }

    fn stored(fs: &MemoryFileSystem) -> Vec<Concept> {
        parse_document(&fs.contents(FILE).unwrap()).concepts
    }

    #[test]
    fn test_requires_at_least_one_change() {
        let fs = seeded_fs();
        let confirmer = ScriptedConfirmer::declining();
        let ctx = CommandContext::new(&fs, &confirmer, "/repo");
        let opts = UpdateOptions {
            concept: "Docker".into(),
            ..UpdateOptions::default()
        };

        let err = update_concept(&ctx, &opts).unwrap_err();
        assert!(matches!(err, ComplexityError::Usage { .. }));
    }

    #[test]
    fn test_updates_level_case_insensitively() {
        let fs = seeded_fs();
        let confirmer = ScriptedConfirmer::declining();
        let ctx = CommandContext::new(&fs, &confirmer, "/repo");
        let opts = UpdateOptions {
            concept: "jest".into(),
            level: Some("2".into()),
            ..UpdateOptions::default()
        };

        let report = update_concept(&ctx, &opts).unwrap();
        assert_eq!(report.previous_topic, "Jest");
        assert_eq!(report.updated, Concept::new("Jest", "testing", Criticality::Important));
        assert!(stored(&fs).contains(&report.updated));
    }

    #[test]
    fn test_invalid_level_rejected() {
        let fs = seeded_fs();
        let confirmer = ScriptedConfirmer::declining();
        let ctx = CommandContext::new(&fs, &confirmer, "/repo");
        let opts = UpdateOptions {
            concept: "Jest".into(),
            level: Some("0".into()),
            ..UpdateOptions::default()
        };

        assert!(update_concept(&ctx, &opts).is_err());
        assert_eq!(fs.write_count(), 0);
    }

    #[test]
    fn test_unknown_concept_is_validation_error() {
        let fs = seeded_fs();
        let confirmer = ScriptedConfirmer::declining();
        let ctx = CommandContext::new(&fs, &confirmer, "/repo");
        let opts = UpdateOptions {
            concept: "Kafka".into(),
            level: Some("1".into()),
            ..UpdateOptions::default()
        };

        let err = update_concept(&ctx, &opts).unwrap_err();
        assert_eq!(err.to_string(), "Concept \"Kafka\" not found.");
    }

    #[test]
    fn test_rename_onto_other_concept_rejected() {
        let fs = seeded_fs();
        let confirmer = ScriptedConfirmer::declining();
        let ctx = CommandContext::new(&fs, &confirmer, "/repo");
        let opts = UpdateOptions {
            concept: "Jest".into(),
            name: Some("docker".into()),
            ..UpdateOptions::default()
        };

        assert!(update_concept(&ctx, &opts).is_err());
        assert_eq!(fs.write_count(), 0);
    }

    #[test]
    fn test_rename_changing_only_case_is_allowed() {
        let fs = seeded_fs();
        let confirmer = ScriptedConfirmer::declining();
        let ctx = CommandContext::new(&fs, &confirmer, "/repo");
        let opts = UpdateOptions {
            concept: "Jest".into(),
            name: Some("JEST".into()),
            ..UpdateOptions::default()
        };

        let report = update_concept(&ctx, &opts).unwrap();
        assert_eq!(report.updated.topic, "JEST");
        assert_eq!(stored(&fs).len(), 2);
    }

    #[test]
    fn test_rename_to_header_word_rejected() {
        let fs = seeded_fs();
        let before = fs.contents(FILE);
        let confirmer = ScriptedConfirmer::declining();
        let ctx = CommandContext::new(&fs, &confirmer, "/repo");
        let opts = UpdateOptions {
            concept: "Jest".into(),
            name: Some("Topic".into()),
            ..UpdateOptions::default()
        };

        let err = update_concept(&ctx, &opts).unwrap_err();
        assert!(matches!(err, ComplexityError::Validation { .. }));
        assert_eq!(fs.contents(FILE), before);
        assert_eq!(fs.write_count(), 0);
    }

    #[test]
    fn test_rename_with_pipe_is_read_back() {
        let fs = seeded_fs();
        let confirmer = ScriptedConfirmer::declining();
        let ctx = CommandContext::new(&fs, &confirmer, "/repo");
        let opts = UpdateOptions {
            concept: "Jest".into(),
            name: Some("Jest|Vitest".into()),
            ..UpdateOptions::default()
        };

        update_concept(&ctx, &opts).unwrap();
        assert!(stored(&fs).contains(&Concept::new("Jest|Vitest", "testing", Criticality::Situational)));
    }

    #[test]
    fn test_blank_level_counts_as_not_given() {
        let fs = seeded_fs();
        let confirmer = ScriptedConfirmer::declining();
        let ctx = CommandContext::new(&fs, &confirmer, "/repo");

        let only_blank = UpdateOptions {
            concept: "Jest".into(),
            level: Some(String::new()),
            ..UpdateOptions::default()
        };
        let err = update_concept(&ctx, &only_blank).unwrap_err();
        assert!(matches!(err, ComplexityError::Usage { .. }));

        let with_name = UpdateOptions {
            name: Some("Vitest".into()),
            ..only_blank
        };
        let report = update_concept(&ctx, &with_name).unwrap();
        assert!(!report.level_changed);
        assert_eq!(report.updated, Concept::new("Vitest", "testing", Criticality::Situational));
    }

    #[test]
    fn test_new_area_declined_cancels() {
        let fs = seeded_fs();
        let before = fs.contents(FILE);
        let confirmer = ScriptedConfirmer::answering([false]);
        let ctx = CommandContext::new(&fs, &confirmer, "/repo");
        let opts = UpdateOptions {
            concept: "Docker".into(),
            area: Some("platform".into()),
            ..UpdateOptions::default()
        };

        let err = update_concept(&ctx, &opts).unwrap_err();
        assert!(err.is_cancelled());
        assert_eq!(
            confirmer.prompts(),
            vec!["No pre-existing area \"platform\" found. Would you still like to use it?"]
        );
        assert_eq!(fs.contents(FILE), before);
    }

    #[test]
    fn test_report_lists_changed_fields() {
        let report = UpdateReport {
            previous_topic: "Jest".into(),
            updated: Concept::new("Vitest", "testing", Criticality::Important),
            renamed: true,
            level_changed: true,
            area_changed: false,
        };
        assert_eq!(
            report.render(&PlainFormatter),
            "[OK] Updated \"Jest\"\n  -> Name: Vitest\n  -> Level: 2"
        );
    }
}
