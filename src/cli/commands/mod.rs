//! Command implementations for gtd.
//!
//! This module contains the implementation of all CLI subcommands.

use std::io;
use std::path::Path;

use colored::Colorize;

use crate::cli::args::OutputFormat;
use crate::config::{Config, Paths};
use crate::core::Preview;
use crate::error::GtdError;
use crate::output::{format_command, format_folders};
use crate::parser::parse;
use crate::shell::{Shell, ShellOptions};

/// Interpret one line given as separate words.
///
/// Returns the rendered command and whether it was interpreted successfully.
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn parse_line(words: &[String], format: OutputFormat) -> Result<(String, bool), GtdError> {
    let command = parse(&words.join(" "));
    let accepted = !command.is_incorrect();
    Ok((format_command(&command, format)?, accepted))
}

/// Execute folders command
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn folders(format: OutputFormat) -> Result<String, GtdError> {
    format_folders(format)
}

/// Run the interactive shell on stdin and stdout.
///
/// # Errors
///
/// Returns an error if reading or writing the terminal fails.
pub fn shell(config: &Config, format: OutputFormat) -> Result<String, GtdError> {
    let options = ShellOptions::from_config(&config.shell, format);
    let mut shell = Shell::new(Preview::new(format), options);

    let stdin = io::stdin();
    let summary = shell.run(stdin.lock(), io::stdout())?;

    if format == OutputFormat::Json {
        return Ok(String::new());
    }
    Ok(format!("{} executed, {} rejected", summary.executed, summary.rejected)
        .dimmed()
        .to_string())
}

/// Write a default configuration file.
///
/// Uses `path` if given, otherwise `~/.gtd/config.yaml`.
///
/// # Errors
///
/// Returns an error if the file exists and `force` is not set, or if it
/// cannot be written.
pub fn init_config(path: Option<&Path>, force: bool) -> Result<String, GtdError> {
    let target = match path {
        Some(path) => path.to_path_buf(),
        None => {
            let paths = Paths::new()?;
            paths.ensure_dirs()?;
            paths.config_file
        },
    };

    if target.exists() && !force {
        return Err(GtdError::Config(format!(
            "{} already exists, use --force to overwrite it",
            target.display()
        )));
    }

    Config::default().save_to_path(&target)?;
    Ok(format!("{} {}", "Wrote".green(), target.display()))
}
