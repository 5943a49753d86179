//! Output formatting for gtd.
//!
//! This module renders parsed commands and the folder list for display.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::core::{Command, FolderType};
use crate::error::GtdError;

pub use json::*;
pub use pretty::*;

/// Format a command based on output format
///
/// # Errors
///
/// Returns `GtdError::Json` if JSON serialization fails.
pub fn format_command(command: &Command, format: OutputFormat) -> Result<String, GtdError> {
    match format {
        OutputFormat::Pretty => Ok(format_command_pretty(command)),
        OutputFormat::Json => format_command_json(command),
    }
}

/// Format the folder names based on output format
///
/// # Errors
///
/// Returns `GtdError::Json` if JSON serialization fails.
pub fn format_folders(format: OutputFormat) -> Result<String, GtdError> {
    match format {
        OutputFormat::Pretty => Ok(FolderType::ALL
            .iter()
            .map(FolderType::as_str)
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => format_folders_json(),
    }
}
