//! Parsed commands handed to an executor.

use serde::Serialize;

use super::FolderType;

/// Failure classification carried by [`Command::Incorrect`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The line contains `|`.
    SeparatorForbidden,
    /// The line has no command word.
    MalformedLine,
    /// The command word is not recognised.
    UnknownCommandWord,
    /// `add` without a description.
    EmptyDescription,
    /// A folder name outside [`FolderType`].
    InvalidFolder,
    /// Index text that is not a run of numbers.
    InvalidIndexFormat,
    /// Neither move grammar matched.
    InvalidMoveSyntax,
}

/// One interpreted input line.
///
/// Every line yields exactly one of these; failures are the
/// [`Command::Incorrect`] variant rather than an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    /// Add a task to the inbox.
    Add {
        /// Trimmed, non-empty task text.
        description: String,
    },
    /// Show the tasks in a folder.
    List {
        /// Folder to show.
        folder: FolderType,
    },
    /// Mark tasks as done.
    Done {
        /// Task positions, in the order typed.
        indices: Vec<usize>,
    },
    /// Remove tasks.
    Delete {
        /// Task positions, in the order typed.
        indices: Vec<usize>,
    },
    /// Refile tasks into another folder.
    Move {
        /// Task positions, in the order typed.
        indices: Vec<usize>,
        /// Destination folder.
        folder: FolderType,
    },
    /// Switch into project mode.
    #[serde(rename = "projmode")]
    ProjMode,
    /// Show the command reference.
    Help,
    /// Leave the program.
    Exit,
    /// The line could not be interpreted.
    Incorrect {
        /// What went wrong.
        kind: ErrorKind,
        /// Human-readable diagnostic.
        message: String,
    },
}

impl Command {
    pub const ADD_WORD: &'static str = "add";
    pub const LIST_WORD: &'static str = "list";
    pub const DONE_WORD: &'static str = "done";
    pub const DELETE_WORD: &'static str = "delete";
    pub const MOVE_WORD: &'static str = "move";
    pub const PROJ_MODE_WORD: &'static str = "projmode";
    pub const HELP_WORD: &'static str = "help";
    pub const EXIT_WORD: &'static str = "exit";

    /// The command word that produces this variant, if any.
    #[must_use]
    pub const fn word(&self) -> Option<&'static str> {
        match self {
            Self::Add { .. } => Some(Self::ADD_WORD),
            Self::List { .. } => Some(Self::LIST_WORD),
            Self::Done { .. } => Some(Self::DONE_WORD),
            Self::Delete { .. } => Some(Self::DELETE_WORD),
            Self::Move { .. } => Some(Self::MOVE_WORD),
            Self::ProjMode => Some(Self::PROJ_MODE_WORD),
            Self::Help => Some(Self::HELP_WORD),
            Self::Exit => Some(Self::EXIT_WORD),
            Self::Incorrect { .. } => None,
        }
    }

    #[must_use]
    pub const fn is_exit(&self) -> bool {
        matches!(self, Self::Exit)
    }

    #[must_use]
    pub const fn is_incorrect(&self) -> bool {
        matches!(self, Self::Incorrect { .. })
    }
}
