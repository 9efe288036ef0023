//! Initialize store use case

use crate::error::Result;
use crate::infrastructure::{Config, DirectoryStore};
use std::fs;
use std::path::Path;

/// Initialize a new list store at the specified path.
pub fn init(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let store = DirectoryStore::new(path.to_path_buf());
    store.initialize()?;
    store.save_config(&Config::default())?;

    println!("Initialized checklist store at {}", path.display());

    Ok(())
}
