//! Configuration management for gtd.
//!
//! This module handles loading and saving configuration from `~/.gtd/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ColorSetting, Config, GeneralConfig, ShellConfig};
