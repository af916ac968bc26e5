use crate::commands::ListFormat;
use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "complexity")]
#[command(about = "Maintain a COMPLEXITY.md knowledge map for your project", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Plain output: no colors, ASCII only
    #[arg(long, global = true)]
    pub plain: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create an empty COMPLEXITY.md in the current directory
    Init {
        /// Project name used in the intro sentence
        #[arg(long)]
        name: Option<String>,

        /// Overwrite an existing COMPLEXITY.md
        #[arg(short, long)]
        force: bool,
    },

    /// Add a concept
    Add {
        /// Concept (technology, skill) name
        concept: String,

        /// Criticality level (1-3)
        level: Option<String>,

        /// Area, e.g. backend or devops
        area: Option<String>,

        /// Criticality level (1-3), alternative to the positional level
        #[arg(long = "level", value_name = "LEVEL")]
        level_flag: Option<String>,

        /// Add a new area without asking
        #[arg(short, long)]
        force: bool,
    },

    /// Update a concept's level, area or name
    Update {
        concept: String,

        /// New criticality level (1-3)
        #[arg(long)]
        level: Option<String>,

        /// New area
        #[arg(long)]
        area: Option<String>,

        /// New concept name
        #[arg(long)]
        name: Option<String>,

        /// Switch to a new area without asking
        #[arg(short, long)]
        force: bool,
    },

    /// Remove a concept
    Remove {
        concept: String,

        /// Remove without confirmation
        #[arg(short, long)]
        force: bool,
    },

    /// List concepts grouped by criticality
    List {
        /// Output format
        #[arg(long, value_enum, default_value_t = ListFormat::Terminal)]
        format: ListFormat,
    },

    /// Print instructions for building the map
    Prompt,
}
