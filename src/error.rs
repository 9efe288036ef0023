//! Error types for checklist

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for checklist
#[derive(Debug, Error)]
pub enum ChecklistError {
    #[error("Not a checklist directory: {0}")]
    NotChecklistDirectory(PathBuf),

    #[error("List not found: {0}")]
    ListNotFound(String),

    #[error("Invalid index: {0}")]
    InvalidIndex(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl ChecklistError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ChecklistError::NotChecklistDirectory(_) => 2,
            ChecklistError::ListNotFound(_) => 3,
            ChecklistError::InvalidIndex(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            ChecklistError::NotChecklistDirectory(path) => {
                format!(
                    "Not a checklist directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'checklist init' in this directory to create a new store\n\
                    • Navigate to an existing checklist directory\n\
                    • Set CHECKLIST_ROOT environment variable to your store path",
                    path.display()
                )
            }
            ChecklistError::ListNotFound(name) => {
                format!(
                    "List not found: '{}'\n\n\
                    Suggestions:\n\
                    • Use 'checklist lists' to see available lists\n\
                    • Refer to a list by its exact name or its position\n\
                    • Create it with: checklist new '{}'",
                    name, name
                )
            }
            ChecklistError::InvalidIndex(msg) => {
                format!(
                    "Invalid index: {}\n\n\
                    Positions start at 1 and are shown by 'checklist show'",
                    msg
                )
            }
            ChecklistError::Config(msg) => {
                if msg.contains("Invalid write policy") {
                    format!(
                        "{}\n\n\
                        Valid write policies: immediate, deferred\n\
                        Example: checklist config write_policy deferred",
                        msg
                    )
                } else if msg.contains("No list selected") {
                    format!(
                        "{}\n\n\
                        Select one with 'checklist select <LIST>' or pass --list <LIST>",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using ChecklistError
pub type Result<T> = std::result::Result<T, ChecklistError>;
