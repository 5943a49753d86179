//! JSON output formatting for gtd.

use serde_json::json;

use crate::core::{Command, FolderType};
use crate::error::GtdError;

/// Format a command as JSON
///
/// # Errors
///
/// Returns `GtdError::Json` if JSON serialization fails.
pub fn format_command_json(command: &Command) -> Result<String, GtdError> {
    Ok(serde_json::to_string_pretty(command)?)
}

/// Format the folder list as JSON
///
/// # Errors
///
/// Returns `GtdError::Json` if JSON serialization fails.
pub fn format_folders_json() -> Result<String, GtdError> {
    let output = json!({
        "count": FolderType::ALL.len(),
        "items": FolderType::ALL,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ErrorKind;

    #[test]
    fn test_format_command_json() {
        let json = format_command_json(&Command::Done {
            indices: vec![4, 2],
        })
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["command"], "done");
        assert_eq!(value["indices"], json!([4, 2]));
    }

    #[test]
    fn test_format_incorrect_json() {
        let json = format_command_json(&Command::Incorrect {
            kind: ErrorKind::InvalidMoveSyntax,
            message: "nope".to_string(),
        })
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["kind"], "invalid_move_syntax");
    }

    #[test]
    fn test_format_folders_json() {
        let json = format_folders_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["count"], 6);
        assert_eq!(value["items"][0], "inbox");
        assert_eq!(value["items"][5], "some");
    }

    #[test]
    fn test_format_unit_variant_json() {
        let json = format_command_json(&Command::Exit).unwrap();
        assert!(json.contains("\"exit\""));
    }
}
