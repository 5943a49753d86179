//! The `move` command and its two argument grammars.
//!
//! ```text
//! move 1 2 -f=next      indices, then a -f= flag naming the folder
//! move next 1 2         folder word first, then indices
//! ```
//!
//! The flag form is always tried first. If it matches, the folder-first form
//! is never consulted, even when the flag form then fails validation.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use crate::core::{Command, FolderType};
use crate::error::ParseError;
use crate::parser::parse_indices;

static FLAG_FORM: Lazy<Regex> = Lazy::new(|| {
    // Greedy: the last "-f=" on the line separates indices from folder
    Regex::new(r"^(?P<indices>.*)-f(?-u:\s)*=(?P<folder>.*)$")
        .unwrap_or_else(|e| panic!("Invalid move flag regex: {e}"))
});

static FOLDER_FIRST_FORM: Lazy<Regex> = Lazy::new(|| {
    // Alternation follows FolderType::ALL, so "someday" is tried before "some".
    // Case folding and whitespace are ASCII only, so U+017F never folds to "s".
    let folders = FolderType::ALL
        .iter()
        .map(FolderType::as_str)
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(
        r"^(?i-u:(?P<folder>{folders}))(?-u:\s)+(?P<indices>[0-9]+.*)$"
    ))
        .unwrap_or_else(|e| panic!("Invalid move folder-first regex: {e}"))
});

/// Which grammar a move argument matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveForm {
    /// `<indices> -f=<folder>`
    Flag,
    /// `<folder> <indices>`
    FolderFirst,
}

/// Move arguments split into their two parts, before validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveArgs<'a> {
    /// The grammar that matched.
    pub form: MoveForm,
    /// Index text, trimmed.
    pub indices: &'a str,
    /// Folder text, trimmed but not yet validated.
    pub folder: &'a str,
}

/// Split move arguments using the first grammar that matches.
///
/// # Errors
///
/// Returns [`ParseError::InvalidMoveSyntax`] if neither grammar matches.
pub fn split_move_args(args: &str) -> Result<MoveArgs<'_>, ParseError> {
    let args = args.trim();

    let (form, caps) = if let Some(caps) = FLAG_FORM.captures(args) {
        (MoveForm::Flag, caps)
    } else if let Some(caps) = FOLDER_FIRST_FORM.captures(args) {
        (MoveForm::FolderFirst, caps)
    } else {
        return Err(ParseError::InvalidMoveSyntax);
    };
    trace!(?form, "move arguments matched");

    Ok(MoveArgs {
        form,
        indices: caps.name("indices").map_or("", |m| m.as_str().trim()),
        folder: caps.name("folder").map_or("", |m| m.as_str().trim()),
    })
}

/// `move <indices> -f=<folder>` or `move <folder> <indices>`
pub(crate) fn prepare_move(args: &str) -> Result<Command, ParseError> {
    let split = split_move_args(args)?;

    let indices = parse_indices(split.indices)?;
    let folder = FolderType::from_name(split.folder).ok_or_else(|| ParseError::InvalidFolder {
        command: Command::MOVE_WORD,
        found: split.folder.to_lowercase(),
    })?;

    Ok(Command::Move { indices, folder })
}
