//! Path resolution for gtd configuration files.
//!
//! All gtd configuration is stored in `~/.gtd/`:
//! - `config.yaml` - Main configuration file

use std::path::PathBuf;

use tracing::warn;

use crate::error::GtdError;

/// Paths to gtd configuration files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.gtd/`
    pub root: PathBuf,
    /// Config file: `~/.gtd/config.yaml`
    pub config_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, GtdError> {
        let home = std::env::var("HOME")
            .map_err(|_| GtdError::Config("Could not determine home directory".to_string()))?;

        Ok(Self::with_root(PathBuf::from(home).join(".gtd")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            root,
        }
    }

    /// Ensure the root directory exists, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), GtdError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                GtdError::Config(format!(
                    "Failed to create directory {}: {e}",
                    self.root.display()
                ))
            })?;
        }

        Ok(())
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|e| {
            warn!(error = %e, "could not determine home directory, using ./.gtd");
            Self::with_root(PathBuf::from(".gtd"))
        })
    }
}
