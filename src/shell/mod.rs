//! Interactive line loop.
//!
//! Reads one line at a time, interprets it, and hands the resulting command
//! to an [`Executor`]. Help and rejected lines are answered by the shell
//! itself and never reach the executor.

use std::io::{BufRead, Write};

use colored::Colorize;
use tracing::{debug, info};

use crate::cli::args::OutputFormat;
use crate::config::ShellConfig;
use crate::core::{Command, Executor};
use crate::error::GtdError;
use crate::output::{format_command, help_text};
use crate::parser::parse;

/// How the shell presents itself.
#[derive(Debug, Clone)]
pub struct ShellOptions {
    /// Printed before every line is read.
    pub prompt: String,
    /// Print a banner before the first prompt.
    pub greeting: bool,
    /// Format used for rejected lines.
    pub format: OutputFormat,
}

impl ShellOptions {
    #[must_use]
    pub fn from_config(config: &ShellConfig, format: OutputFormat) -> Self {
        Self {
            prompt: config.prompt.clone(),
            greeting: config.greeting,
            format,
        }
    }
}

/// Counts reported when the loop ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShellSummary {
    /// Commands handed to the executor, including `exit`.
    pub executed: usize,
    /// Lines that came back as incorrect commands.
    pub rejected: usize,
}

/// The read, interpret, execute loop.
pub struct Shell<E> {
    executor: E,
    options: ShellOptions,
}

impl<E: Executor> Shell<E> {
    #[must_use]
    pub const fn new(executor: E, options: ShellOptions) -> Self {
        Self { executor, options }
    }

    /// Run until `exit` or end of input.
    ///
    /// Blank lines are skipped without a message.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing fails, or if the executor fails.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        mut output: W,
    ) -> Result<ShellSummary, GtdError> {
        if self.options.greeting {
            writeln!(
                output,
                "{} type {} to see all the commands",
                "gtd".bold(),
                "help".cyan()
            )?;
        }

        let mut summary = ShellSummary::default();
        let mut lines = input.lines();

        loop {
            write!(output, "{}", self.options.prompt)?;
            output.flush()?;

            let Some(line) = lines.next() else {
                debug!("end of input");
                break;
            };
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let command = parse(&line);
            match &command {
                Command::Help => writeln!(output, "{}", help_text())?,
                Command::Incorrect { kind, .. } => {
                    debug!(?kind, "rejected input line");
                    summary.rejected += 1;
                    writeln!(output, "{}", format_command(&command, self.options.format)?)?;
                },
                _ => {
                    let text = self.executor.execute(&command)?;
                    summary.executed += 1;
                    if !text.is_empty() {
                        writeln!(output, "{text}")?;
                    }
                    if command.is_exit() {
                        break;
                    }
                },
            }
        }

        info!(executed = summary.executed, rejected = summary.rejected, "shell finished");
        Ok(summary)
    }
}
