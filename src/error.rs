//! Error types for gtd.
//!
//! [`ParseError`] is local to the interpreter: every sub-parser returns it and
//! [`crate::parser::parse`] folds it into [`Command::Incorrect`]. [`GtdError`]
//! covers everything around the interpreter (configuration, IO, rendering).

use thiserror::Error;

use crate::core::{Command, ErrorKind, FolderType};

/// Help hint appended to messages that reject a whole line.
const HELP_HINT: &str = "you may type 'help' to see all the commands";

/// A failure while interpreting one input line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The line contains the reserved `|` separator.
    #[error("This is an incorrect format, {}. The command should not contain the separator '|'", HELP_HINT)]
    SeparatorForbidden,

    /// The line has no command word at all.
    #[error("This is an incorrect format, {}. The command should not contain the separator '|'", HELP_HINT)]
    MalformedLine,

    /// The command word is not one of the recognised words.
    #[error("IncorrectCommand")]
    UnknownCommand {
        /// The word that was typed.
        word: String,
    },

    /// `add` was given nothing to add.
    #[error("task description cannot be empty")]
    EmptyDescription,

    /// A folder argument is not one of the folder names.
    #[error(
        "This is a {command} command but '{found}' is not a folder, the folder should be one of {}",
        FolderType::names()
    )]
    InvalidFolder {
        /// The command word the folder was given to.
        command: &'static str,
        /// The rejected folder text, trimmed and lower-cased.
        found: String,
    },

    /// The index text is not a whitespace separated run of numbers.
    #[error("Could not match '{input}' to the correct index, expected numbers separated by spaces, e.g. 1 2 3")]
    InvalidIndexFormat {
        /// The trimmed index text.
        input: String,
    },

    /// An index is too large to represent.
    #[error("Could not match to the correct index, '{token}' is too large")]
    IndexOverflow {
        /// The offending digit run.
        token: String,
    },

    /// Neither move grammar matched.
    #[error(
        "This is an incorrect move command format, use 'move 1 2 -f=next' or 'move next 1 2', {}",
        HELP_HINT
    )]
    InvalidMoveSyntax,
}

impl ParseError {
    /// The classification of this failure.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::SeparatorForbidden => ErrorKind::SeparatorForbidden,
            Self::MalformedLine => ErrorKind::MalformedLine,
            Self::UnknownCommand { .. } => ErrorKind::UnknownCommandWord,
            Self::EmptyDescription => ErrorKind::EmptyDescription,
            Self::InvalidFolder { .. } => ErrorKind::InvalidFolder,
            Self::InvalidIndexFormat { .. } | Self::IndexOverflow { .. } => {
                ErrorKind::InvalidIndexFormat
            },
            Self::InvalidMoveSyntax => ErrorKind::InvalidMoveSyntax,
        }
    }
}

impl From<ParseError> for Command {
    fn from(err: ParseError) -> Self {
        Self::Incorrect {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

/// Application-level errors.
#[derive(Debug, Error)]
pub enum GtdError {
    /// Configuration could not be located, read or written.
    #[error("config error: {0}")]
    Config(String),

    /// Reading input or writing output failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON rendering failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        assert_eq!(ParseError::SeparatorForbidden.kind(), ErrorKind::SeparatorForbidden);
        assert_eq!(
            ParseError::IndexOverflow { token: "9".repeat(40) }.kind(),
            ErrorKind::InvalidIndexFormat
        );
        assert_eq!(
            ParseError::UnknownCommand { word: "foo".to_string() }.kind(),
            ErrorKind::UnknownCommandWord
        );
    }

    #[test]
    fn test_unknown_command_message_is_fixed() {
        let err = ParseError::UnknownCommand { word: "foo".to_string() };
        assert_eq!(err.to_string(), "IncorrectCommand");
    }

    #[test]
    fn test_invalid_folder_message_lists_folders() {
        let err = ParseError::InvalidFolder {
            command: "list",
            found: "archive".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("archive"));
        assert!(message.contains("inbox,next,wait,proj,someday,some"));
    }

    #[test]
    fn test_separator_message_names_separator() {
        assert!(ParseError::SeparatorForbidden.to_string().contains('|'));
        assert!(ParseError::MalformedLine.to_string().contains("help"));
    }

    #[test]
    fn test_into_incorrect_command() {
        let command: Command = ParseError::EmptyDescription.into();
        assert_eq!(
            command,
            Command::Incorrect {
                kind: ErrorKind::EmptyDescription,
                message: "task description cannot be empty".to_string(),
            }
        );
    }
}
