//! Argument preparers for the simple commands.
//!
//! Each preparer receives the raw text after the command word.

use crate::core::{Command, FolderType};
use crate::error::ParseError;
use crate::parser::parse_indices;

/// `add <description>`
pub(crate) fn prepare_add(args: &str) -> Result<Command, ParseError> {
    let description = args.trim();
    if description.is_empty() {
        return Err(ParseError::EmptyDescription);
    }
    Ok(Command::Add {
        description: description.to_string(),
    })
}

/// `list <folder>`
pub(crate) fn prepare_list(args: &str) -> Result<Command, ParseError> {
    FolderType::from_name(args)
        .map(|folder| Command::List { folder })
        .ok_or_else(|| ParseError::InvalidFolder {
            command: Command::LIST_WORD,
            found: args.trim().to_lowercase(),
        })
}

/// `done <indices>`
pub(crate) fn prepare_done(args: &str) -> Result<Command, ParseError> {
    parse_indices(args).map(|indices| Command::Done { indices })
}

/// `delete <indices>`
pub(crate) fn prepare_delete(args: &str) -> Result<Command, ParseError> {
    parse_indices(args).map(|indices| Command::Delete { indices })
}
