//! gtd - a line-oriented command interpreter for a GTD-style task tracker
//!
//! This crate turns one line of user input (`add buy milk`, `done 1 2`,
//! `move 3 -f=next`) into a typed [`Command`] that an [`Executor`] acts on.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod output;
pub mod parser;
pub mod shell;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use crate::core::{Command, Executor, FolderType};
pub use error::{GtdError, ParseError};
pub use parser::parse;
