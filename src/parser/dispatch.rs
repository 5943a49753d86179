//! Command-word dispatch.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::core::{Command, FolderType};
use crate::error::ParseError;
use crate::parser::moves::prepare_move;
use crate::parser::prepare::{prepare_add, prepare_delete, prepare_done, prepare_list};

/// The reserved separator; it may not appear anywhere in a line.
pub const SEPARATOR: char = '|';

static BASIC_COMMAND_FORMAT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(?P<word>[^\s|]+)(?P<arguments>[^|]*)$")
        .unwrap_or_else(|e| panic!("Invalid command format regex: {e}"))
});

/// Interpret one line of user input.
///
/// This never fails: anything that cannot be interpreted comes back as
/// [`Command::Incorrect`] carrying the reason.
///
/// # Examples
///
/// ```
/// use gtd::core::{Command, FolderType};
/// use gtd::parser::parse;
///
/// assert_eq!(
///     parse("move 1 2 -f=next"),
///     Command::Move { indices: vec![1, 2], folder: FolderType::Next }
/// );
/// assert_eq!(parse("next 1 2"), parse("move 1 2 -f=next"));
/// assert!(parse("list archive").is_incorrect());
/// ```
#[must_use]
pub fn parse(line: &str) -> Command {
    let command = interpret(line).unwrap_or_else(Command::from);
    debug!(word = command.word(), incorrect = command.is_incorrect(), "parsed input line");
    command
}

fn interpret(line: &str) -> Result<Command, ParseError> {
    let line = line.trim();
    if line.contains(SEPARATOR) {
        return Err(ParseError::SeparatorForbidden);
    }

    let caps = BASIC_COMMAND_FORMAT
        .captures(line)
        .ok_or(ParseError::MalformedLine)?;
    let word = caps.name("word").map_or("", |m| m.as_str());
    let arguments = caps.name("arguments").map_or("", |m| m.as_str());

    match word {
        Command::ADD_WORD => prepare_add(arguments),
        Command::LIST_WORD => prepare_list(arguments),
        Command::DONE_WORD => prepare_done(arguments),
        Command::DELETE_WORD => prepare_delete(arguments),
        Command::MOVE_WORD => prepare_move(arguments),
        Command::PROJ_MODE_WORD => Ok(Command::ProjMode),
        Command::HELP_WORD => Ok(Command::Help),
        Command::EXIT_WORD => Ok(Command::Exit),
        // "next 1 2" is shorthand for "move next 1 2"
        _ if FolderType::from_name(word).is_some() => prepare_move(line),
        _ => Err(ParseError::UnknownCommand {
            word: word.to_string(),
        }),
    }
}
