//! Core data model for gtd.
//!
//! Commands, folders, and the executor seam shared by the parser and shell.

mod command;
mod folder;
mod traits;

pub use command::{Command, ErrorKind};
pub use folder::FolderType;
#[cfg(test)]
pub use traits::MockExecutor;
pub use traits::{Executor, Preview};
