//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `split` (default): split the source document into per-grouping files
//! - `keys`: list the top-level keys of both locale sections
//! - `init`: write the default configuration file

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// The command to run. Running without a subcommand performs a split.
    pub fn command_or_default(self) -> Command {
        self.command
            .unwrap_or_else(|| Command::Split(SplitCommand::default()))
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Split(cmd)) => cmd.args.common.verbose,
            Some(Command::Keys(cmd)) => cmd.args.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by commands that read the source document.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Source document to split (overrides config file)
    #[arg(long, env = "I18N_SPLIT_SOURCE")]
    pub source: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Default, Parser)]
pub struct SplitArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Directory the grouping files are written to (overrides config file)
    #[arg(long)]
    pub output_root: Option<PathBuf>,

    /// Show what would be written without touching any file
    #[arg(long, conflicts_with = "check")]
    pub dry_run: bool,

    /// Exit with status 1 if any output file is missing or out of date
    #[arg(long)]
    pub check: bool,
}

#[derive(Debug, Default, Args)]
pub struct SplitCommand {
    #[command(flatten)]
    pub args: SplitArgs,
}

#[derive(Debug, Parser)]
pub struct KeysArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct KeysCommand {
    #[command(flatten)]
    pub args: KeysArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Split the source document into one file per grouping
    Split(SplitCommand),
    /// List top-level keys of both locale sections and the grouping that claims each
    Keys(KeysCommand),
    /// Initialize a new .i18nsplitrc.json configuration file
    Init,
}
