//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `compile`: Build the JSON and wikitext artifacts from the list files
//! - `optimize`: Write minimized per-language plain-text lists
//! - `init`: Initialize a `.censorrc.json` configuration file

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
            Some(Command::Compile(cmd)) => cmd.args.common.verbose,
            Some(Command::Optimize(cmd)) => cmd.args.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by the batch commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Directory holding one numbered subdirectory per list version
    /// (overrides config file)
    #[arg(long, env = "CENSOR_LISTS_ROOT")]
    pub lists_root: Option<PathBuf>,

    /// Directory the derived artifacts are written to (overrides config file)
    #[arg(long, env = "CENSOR_OUTPUT_ROOT")]
    pub output_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct CompileArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CompileCommand {
    #[command(flatten)]
    pub args: CompileArgs,
}

#[derive(Debug, Parser)]
pub struct OptimizeArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Languages to optimize (default: all with entries)
    /// Can be specified multiple times: --language een --language kko
    #[arg(long, value_name = "CODE")]
    pub language: Vec<String>,
}

#[derive(Debug, Args)]
pub struct OptimizeCommand {
    #[command(flatten)]
    pub args: OptimizeArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compile the word lists into badwords.json and the wikitext table
    Compile(CompileCommand),
    /// Minimize each language's patterns and write plain-text lists
    Optimize(OptimizeCommand),
    /// Initialize a new .censorrc.json configuration file
    Init,
}
