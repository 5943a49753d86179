//! Line interpreter.
//!
//! Turns one line of user input into a [`Command`](crate::core::Command):
//!
//! ```text
//! add <description>
//! list <folder>
//! done <indices>
//! delete <indices>
//! move <indices> -f=<folder>
//! move <folder> <indices>      (or just: <folder> <indices>)
//! projmode | help | exit
//! ```
//!
//! The interpreter holds no state and performs no IO, so it may be called
//! from any number of threads at once.

mod dispatch;
mod indices;
mod moves;
mod prepare;

pub use dispatch::{parse, SEPARATOR};
pub use indices::parse_indices;
pub use moves::{split_move_args, MoveArgs, MoveForm};
