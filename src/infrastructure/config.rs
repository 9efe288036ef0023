//! Configuration management

use crate::domain::WritePolicy;
use crate::error::{ChecklistError, Result};
use crate::infrastructure::logging::normalize_level;
use crate::infrastructure::store::MARKER_DIR;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Environment variable that overrides the configured log level
pub const LOG_ENV: &str = "CHECKLIST_LOG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub write_policy: WritePolicy,
    #[serde(default)]
    pub pretty_json: bool,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            write_policy: WritePolicy::default(),
            pretty_json: false,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load config from .checklist/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(MARKER_DIR).join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ChecklistError::NotChecklistDirectory(path.to_path_buf())
            } else {
                ChecklistError::Io(e)
            }
        })?;

        Ok(toml::from_str(&contents)?)
    }

    /// Save config to .checklist/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let marker = path.join(MARKER_DIR);
        let config_path = marker.join("config.toml");

        if !marker.exists() {
            fs::create_dir(&marker)?;
        }

        let contents = toml::to_string_pretty(self)?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Log level, with CHECKLIST_LOG taking precedence over the file
    pub fn effective_log_level(&self) -> String {
        std::env::var(LOG_ENV)
            .ok()
            .filter(|level| !level.trim().is_empty())
            .unwrap_or_else(|| self.log_level.clone())
    }

    /// Get a single config value by key
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "write_policy" => Ok(self.write_policy.to_string()),
            "pretty_json" => Ok(self.pretty_json.to_string()),
            "log_level" => Ok(self.log_level.clone()),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set a single config value by key, validating it
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "write_policy" => {
                self.write_policy = value.parse().map_err(ChecklistError::Config)?;
            }
            "pretty_json" => {
                self.pretty_json = value.parse().map_err(|_| {
                    ChecklistError::Config(format!(
                        "Invalid value for pretty_json: '{}'. Expected true or false",
                        value
                    ))
                })?;
            }
            "log_level" => {
                self.log_level = normalize_level(value)
                    .map_err(|_| {
                        ChecklistError::Config(format!(
                            "Invalid log level: '{}'. Valid levels are: off, error, warn, info, debug, trace",
                            value
                        ))
                    })?
                    .to_string();
            }
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> ChecklistError {
    ChecklistError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: write_policy, pretty_json, log_level",
        key
    ))
}
