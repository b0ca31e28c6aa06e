//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Scan source files for direct useEffect usage
//! - `init`: Initialize majboori configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

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
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by scanning commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project root directory to scan
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// Print scanning details and enabled rules
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check source files for direct useEffect usage
    Check(CheckCommand),
    /// Initialize majboori configuration file
    Init,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}
