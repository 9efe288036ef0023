//! Key-scoped record storage

use crate::error::{ChecklistError, Result};
use crate::infrastructure::Config;
use log::debug;
use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use tempfile::NamedTempFile;
use walkdir::WalkDir;

/// Name of the marker directory that holds config, UI state and logs
pub const MARKER_DIR: &str = ".checklist";

/// Flat key/value storage scoped to one storage area
pub trait FileStore {
    /// Create or overwrite the record under `key`
    fn write(&self, key: &str, contents: &str) -> Result<()>;

    /// Read the record under `key`, `None` if it does not exist
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Delete the record under `key`; deleting a missing record succeeds
    fn delete(&self, key: &str) -> Result<()>;

    /// All keys currently stored
    fn list_keys(&self) -> Result<Vec<String>>;
}

fn check_key(key: &str) -> Result<()> {
    if key.is_empty() || key == "." || key == ".." || key.contains(['/', '\\']) {
        return Err(ChecklistError::Storage(format!(
            "Refusing to use '{}' as a storage key",
            key
        )));
    }
    Ok(())
}

/// Records stored as files directly inside one directory
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    pub root: PathBuf,
}

impl DirectoryStore {
    /// Create a store over the given root directory
    pub fn new(root: PathBuf) -> Self {
        DirectoryStore { root }
    }

    /// Discover the store root by walking up from the current directory.
    /// First checks the CHECKLIST_ROOT environment variable.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("CHECKLIST_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_marker_dir(&path) {
                return Ok(DirectoryStore::new(path));
            } else {
                return Err(ChecklistError::Config(format!(
                    "CHECKLIST_ROOT is set to '{}' but no {} directory found. \
                    Run 'checklist init' in that directory or unset CHECKLIST_ROOT.",
                    path.display(),
                    MARKER_DIR
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the store root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_marker_dir(&current) {
                return Ok(DirectoryStore::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(ChecklistError::NotChecklistDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_marker_dir(path: &Path) -> bool {
        path.join(MARKER_DIR).is_dir()
    }

    pub fn marker_dir(&self) -> PathBuf {
        self.root.join(MARKER_DIR)
    }

    pub fn is_initialized(&self) -> bool {
        Self::has_marker_dir(&self.root)
    }

    /// Create the marker directory
    pub fn initialize(&self) -> Result<()> {
        let marker = self.marker_dir();

        if marker.exists() {
            return Err(ChecklistError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&marker)?;
        Ok(())
    }

    pub fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    pub fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }
}

impl FileStore for DirectoryStore {
    /// Replace the file through a temp file in the same directory so a
    /// reader never sees a half-written record.
    fn write(&self, key: &str, contents: &str) -> Result<()> {
        check_key(key)?;
        let path = self.root.join(key);

        let mut tmp = NamedTempFile::new_in(&self.root)?;
        tmp.write_all(contents.as_bytes())?;
        tmp.flush()?;
        tmp.persist(&path).map_err(|e| e.error)?;
        Ok(())
    }

    fn read(&self, key: &str) -> Result<Option<String>> {
        check_key(key)?;
        match fs::read_to_string(self.root.join(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ChecklistError::Io(e)),
        }
    }

    fn delete(&self, key: &str) -> Result<()> {
        check_key(key)?;
        match fs::remove_file(self.root.join(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ChecklistError::Io(e)),
        }
    }

    /// Files directly under the root, in byte order of their names.
    /// Directories and non-UTF-8 names are skipped.
    fn list_keys(&self) -> Result<Vec<String>> {
        let walker = WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name();

        let mut keys = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => return Err(ChecklistError::Io(io::Error::from(e))),
                Err(e) => {
                    debug!("event=list_keys status=skip error={}", e);
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                keys.push(name.to_string());
            }
        }

        Ok(keys)
    }
}

/// In-memory store with switchable failures
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<BTreeMap<String, String>>,
    fail_writes: AtomicBool,
    fail_list: AtomicBool,
    writes: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following write and delete fail
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Make every following key enumeration fail
    pub fn fail_list(&self, fail: bool) {
        self.fail_list.store(fail, Ordering::SeqCst);
    }

    /// Number of successful writes so far
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Raw contents of a record, bypassing the trait
    pub fn raw(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    /// Put raw contents in place, bypassing the trait
    pub fn insert_raw(&self, key: &str, contents: &str) {
        self.lock().insert(key.to_string(), contents.to_string());
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, String>> {
        // every mutation is a single map call, so a poisoned map is still whole
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn check_writable(&self) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(ChecklistError::Storage("store is read-only".to_string()));
        }
        Ok(())
    }
}

impl FileStore for MemoryStore {
    fn write(&self, key: &str, contents: &str) -> Result<()> {
        check_key(key)?;
        self.check_writable()?;
        self.lock().insert(key.to_string(), contents.to_string());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn read(&self, key: &str) -> Result<Option<String>> {
        check_key(key)?;
        Ok(self.lock().get(key).cloned())
    }

    fn delete(&self, key: &str) -> Result<()> {
        check_key(key)?;
        self.check_writable()?;
        self.lock().remove(key);
        Ok(())
    }

    fn list_keys(&self) -> Result<Vec<String>> {
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(ChecklistError::Storage("listing unavailable".to_string()));
        }
        Ok(self.lock().keys().cloned().collect())
    }
}
