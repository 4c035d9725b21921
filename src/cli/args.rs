//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Run catalog checks (placeholders, unfinished, untranslated, etc.)
//! - `lookup`: Translate one message the way the application would
//! - `stats`: Completion statistics per catalog
//! - `clean`: Remove obsolete and vanished messages
//! - `init`: Initialize tsglot configuration file
//! - `serve`: Start MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::rules::CheckRule;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Lookup(cmd)) => cmd.common.verbose,
            Some(Command::Stats(cmd)) => cmd.common.verbose,
            Some(Command::Clean(cmd)) => cmd.common.verbose,
            Some(Command::Init) | Some(Command::Serve) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project root directory (where the config search starts)
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// Directory containing .ts catalogs (overrides config file)
    #[arg(long)]
    pub translations_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Rules to run (default: all)
    #[arg(value_enum)]
    pub rules: Vec<CheckRule>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct LookupCommand {
    /// Context name (usually the class name)
    pub context: String,

    /// Source text as written in the code
    pub source: String,

    /// Disambiguation comment
    #[arg(long, default_value = "")]
    pub comment: String,

    /// Count for plural (numerus) messages
    #[arg(short = 'n', long = "count")]
    pub count: Option<u64>,

    /// Target language when several catalogs are present
    #[arg(long)]
    pub language: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct StatsCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CleanCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Actually rewrite the catalogs (default is dry-run)
    #[arg(long)]
    pub apply: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check translation catalogs for problems
    Check(CheckCommand),
    /// Look up the translation of a message (falls back to the source)
    Lookup(LookupCommand),
    /// Show completion statistics for each catalog
    Stats(StatsCommand),
    /// Remove obsolete and vanished messages from catalogs
    Clean(CleanCommand),
    /// Initialize a new .tsglotrc.json configuration file
    Init,
    /// Start MCP server for AI coding agents
    Serve,
}
