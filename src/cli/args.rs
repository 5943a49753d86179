use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "gtd")]
#[command(about = "A line-oriented command interpreter for a GTD-style task tracker")]
#[command(long_about = "gtd - interpret task-tracker commands

Reads commands such as 'add buy milk', 'done 1 2' or 'move 3 -f=next'
and turns each line into a structured command.

QUICK START:
  gtd                         Start the interactive shell
  gtd parse add buy milk      Interpret a single line
  gtd parse next 1 2          Same as 'move 1 2 -f=next'
  gtd folders                 List the folder names

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Defaults to the `general.default_output` setting, or 'pretty'.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Path to the configuration file
    #[arg(long, env = "GTD_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Start the interactive shell (default)
    ///
    /// Reads one command per line from stdin until 'exit' or end of input.
    Shell,

    /// Interpret a single line and print the resulting command
    ///
    /// The words are joined with single spaces before interpretation.
    /// Exits with status 2 if the line is not a valid command.
    ///
    /// # Examples
    ///
    ///   gtd parse add buy milk
    ///   gtd parse done 1 2 3
    ///   gtd parse move 1 2 -f=next
    #[command(alias = "p")]
    Parse {
        /// The line to interpret
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true, trailing_var_arg = true)]
        line: Vec<String>,
    },

    /// List the folder names tasks can be filed under
    Folders,

    /// Write a default configuration file
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
