//! The seam between the interpreter and whatever acts on its commands.

use crate::cli::args::OutputFormat;
use crate::core::Command;
use crate::error::GtdError;
use crate::output::format_command;

/// Something that carries out parsed commands.
///
/// The task store, its persistence and the meaning of each command live
/// behind this trait. The shell hands it every command except
/// [`Command::Incorrect`] and [`Command::Help`].
#[cfg_attr(test, mockall::automock)]
pub trait Executor {
    /// Carry out one command and return text to show the user.
    ///
    /// # Errors
    ///
    /// Returns an error if the command could not be carried out.
    fn execute(&mut self, command: &Command) -> Result<String, GtdError>;
}

/// Executor that only reports what it was asked to do.
#[derive(Debug, Clone, Copy, Default)]
pub struct Preview {
    format: OutputFormat,
}

impl Preview {
    #[must_use]
    pub const fn new(format: OutputFormat) -> Self {
        Self { format }
    }
}

impl Executor for Preview {
    fn execute(&mut self, command: &Command) -> Result<String, GtdError> {
        format_command(command, self.format)
    }
}
