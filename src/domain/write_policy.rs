//! When queued record writes reach storage

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WritePolicy {
    /// Write through after every mutation
    #[default]
    Immediate,
    /// Hold writes until the caller flushes; later writes to the same
    /// list replace earlier ones still waiting
    Deferred,
}

impl FromStr for WritePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "immediate" => Ok(WritePolicy::Immediate),
            "deferred" => Ok(WritePolicy::Deferred),
            _ => Err(format!(
                "Invalid write policy: '{}'. Valid policies are: immediate, deferred",
                s
            )),
        }
    }
}

impl fmt::Display for WritePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WritePolicy::Immediate => write!(f, "immediate"),
            WritePolicy::Deferred => write!(f, "deferred"),
        }
    }
}
