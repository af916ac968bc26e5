//! Command-line interface.
//!
//! - Argument definitions (`args`)
//! - Runtime setup (`setup`)
//! - Dispatch from parsed arguments to [`crate::commands`]

pub mod args;
pub mod setup;

pub use args::{Cli, Commands};
pub use setup::{init_logging, verbosity_filter};

use crate::commands::{
    self, AddOptions, CommandContext, CommandReport, InitOptions, RemoveOptions, UpdateOptions,
};
use crate::config::load_config;
use crate::errors::ComplexityError;
use crate::formatting::{ColoredFormatter, OutputFormatter};
use crate::io::RealFileSystem;
use crate::prompt::TerminalConfirmer;

/// Run one command against the real file system and terminal, printing the
/// report or the error. Returns the process exit code.
pub fn run(cli: Cli) -> u8 {
    let fs = RealFileSystem::new();
    let confirmer = TerminalConfirmer::new();

    let cwd = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Error: cannot determine the current directory: {e}");
            return 1;
        }
    };
    let config = load_config(&fs, &cwd);
    let formatter = ColoredFormatter::new(config.formatting(cli.plain));
    let ctx = CommandContext::new(&fs, &confirmer, cwd).with_config(config);

    match dispatch(&ctx, cli.command) {
        Ok(report) => {
            println!("{}", report.render(&formatter));
            0
        }
        Err(err) => report_error(&err, &formatter),
    }
}

pub fn dispatch(ctx: &CommandContext<'_>, command: Commands) -> Result<Box<dyn CommandReport>, ComplexityError> {
    tracing::debug!(?command, cwd = %ctx.cwd.display(), "dispatching command");

    let report: Box<dyn CommandReport> = match command {
        Commands::Init { name, force } => {
            Box::new(commands::init_complexity_file(ctx, &InitOptions { name, force })?)
        }
        Commands::Add {
            concept,
            level,
            area,
            level_flag,
            force,
        } => Box::new(commands::add_concept(
            ctx,
            &AddOptions {
                concept,
                level,
                area,
                level_flag,
                force,
            },
        )?),
        Commands::Update {
            concept,
            level,
            area,
            name,
            force,
        } => Box::new(commands::update_concept(
            ctx,
            &UpdateOptions {
                concept,
                level,
                area,
                name,
                force,
            },
        )?),
        Commands::Remove { concept, force } => {
            Box::new(commands::remove_concept(ctx, &RemoveOptions { concept, force })?)
        }
        Commands::List { format } => Box::new(commands::list_concepts(ctx, format)?),
        Commands::Prompt => Box::new(commands::prompt_text()),
    };
    Ok(report)
}

fn report_error(err: &ComplexityError, formatter: &dyn OutputFormatter) -> u8 {
    if err.is_cancelled() {
        println!("{}", formatter.warning(&err.to_string()));
        return err.exit_code();
    }

    tracing::debug!(error = ?err, "command failed");
    eprintln!("{}", formatter.error(&format!("Error: {err}")));
    if let Some(hint) = err.hint() {
        eprintln!("{}", formatter.warning(&hint));
    }
    err.exit_code()
}
