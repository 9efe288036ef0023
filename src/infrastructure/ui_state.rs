//! Front-end state kept between runs

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::infrastructure::store::MARKER_DIR;

/// Persisted front-end state (written to .checklist/state.json)
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct UiState {
    /// Name of the open list. Stored by name because list positions
    /// follow storage enumeration order.
    #[serde(default)]
    pub selected: Option<String>,
}

/// Read state.json from the store root
pub fn read_ui_state(root: &Path) -> Option<UiState> {
    let path = root.join(MARKER_DIR).join("state.json");
    let content = fs::read_to_string(&path).ok()?;
    serde_json::from_str(&content).ok()
}

/// Write state.json to the store root
pub fn write_ui_state(root: &Path, state: &UiState) -> Result<(), std::io::Error> {
    let path = root.join(MARKER_DIR).join("state.json");
    let content = serde_json::to_string_pretty(state)?;
    fs::write(&path, content)
}
