//! Command-line surface for gtd.

pub mod args;
pub mod commands;
