use super::{success_line, CommandContext, CommandReport};
use crate::core::template::{COMPLEXITY_FILE, DEFAULT_PROJECT_NAME};
use crate::core::Document;
use crate::errors::ComplexityError;
use crate::formatting::OutputFormatter;
use crate::io::find_complexity_file;
use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    pub name: Option<String>,
    /// Overwrite an existing COMPLEXITY.md in the working directory.
    pub force: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitReport {
    pub path: PathBuf,
    pub project_name: String,
    pub overwritten: bool,
}

/// Write an empty map into the working directory.
///
/// Refuses when a COMPLEXITY.md is already reachable from the working
/// directory, unless forced.
pub fn init_complexity_file(ctx: &CommandContext<'_>, options: &InitOptions) -> Result<InitReport, ComplexityError> {
    let path = ctx.cwd.join(COMPLEXITY_FILE);

    if let Some(existing) = find_complexity_file(ctx.fs, &ctx.cwd) {
        if !options.force {
            return Err(ComplexityError::AlreadyExists { path: existing });
        }
        tracing::info!(existing = %existing.display(), "forcing new complexity file");
    }

    let overwritten = ctx.fs.exists(&path);
    let project_name = resolve_project_name(ctx, options);
    ctx.save_document(&path, &Document::empty(project_name.clone()))?;

    Ok(InitReport {
        path,
        project_name,
        overwritten,
    })
}

/// `--name`, then `[init] project_name`, then the directory name.
fn resolve_project_name(ctx: &CommandContext<'_>, options: &InitOptions) -> String {
    options
        .name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .or_else(|| ctx.config.init_project_name())
        .map(str::to_string)
        .or_else(|| {
            ctx.cwd
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| DEFAULT_PROJECT_NAME.to_string())
}

impl CommandReport for InitReport {
    fn render(&self, formatter: &dyn OutputFormatter) -> String {
        let verb = if self.overwritten { "Replaced" } else { "Created" };
        success_line(
            formatter,
            &format!("{verb} {} for {}", self.path.display(), self.project_name),
        )
    }
}
