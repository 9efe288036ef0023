//! List repository: lists to records and back

use crate::domain::storage_key::{key_for_name, name_for_key, RECORD_SUFFIX};
use crate::domain::{Item, ListCollection, TodoList};
use crate::error::Result;
use crate::infrastructure::store::FileStore;
use log::{debug, error, info, warn};

/// Sole writer of persisted list state.
///
/// Each list lives in its own record holding the full item sequence as a
/// JSON array. Nothing here returns an error to the caller: failed reads load
/// as empty lists and failed writes are logged and reported as `false`.
#[derive(Debug)]
pub struct ListRepository<S: FileStore> {
    store: S,
    pretty: bool,
}

impl<S: FileStore> ListRepository<S> {
    pub fn new(store: S) -> Self {
        ListRepository {
            store,
            pretty: false,
        }
    }

    /// Write records pretty-printed
    pub fn with_pretty_json(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Rebuild every list from storage, in the store's enumeration order
    pub fn load_all(&self) -> ListCollection {
        let keys = match self.store.list_keys() {
            Ok(keys) => keys,
            Err(e) => {
                error!("event=load_all status=error error={}", e);
                return ListCollection::new();
            }
        };

        let mut lists = ListCollection::new();
        for key in keys {
            if !key.ends_with(RECORD_SUFFIX) {
                continue;
            }
            let Some(name) = name_for_key(&key) else {
                warn!("event=load_all status=skip key={:?} reason=not_a_list_key", key);
                continue;
            };
            let items = self.read_record(&key);
            lists.push(TodoList::with_items(name, items));
        }

        info!("event=load_all status=ok lists={}", lists.len());
        lists
    }

    /// Read one list's items; missing or unreadable records load as empty
    pub fn load_list(&self, name: &str) -> Vec<Item> {
        self.read_record(&key_for_name(name))
    }

    fn read_record(&self, key: &str) -> Vec<Item> {
        let contents = match self.store.read(key) {
            Ok(Some(contents)) => contents,
            Ok(None) => {
                debug!("event=read_record status=missing key={:?}", key);
                return Vec::new();
            }
            Err(e) => {
                warn!("event=read_record status=unreadable key={:?} error={}", key, e);
                return Vec::new();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(items) => items,
            Err(e) => {
                warn!("event=read_record status=corrupt key={:?} error={}", key, e);
                Vec::new()
            }
        }
    }

    /// Overwrite the list's record with the complete item sequence.
    ///
    /// Returns whether the record reached storage.
    pub fn save(&self, name: &str, items: &[Item]) -> bool {
        let key = key_for_name(name);
        match self.try_save(&key, items) {
            Ok(()) => {
                debug!("event=save status=ok key={:?} items={}", key, items.len());
                true
            }
            Err(e) => {
                error!("event=save status=error key={:?} error={}", key, e);
                false
            }
        }
    }

    fn try_save(&self, key: &str, items: &[Item]) -> Result<()> {
        let contents = if self.pretty {
            serde_json::to_string_pretty(items)?
        } else {
            serde_json::to_string(items)?
        };
        self.store.write(key, &contents)
    }

    /// Delete the list's record. A record that is already gone counts as removed.
    pub fn remove(&self, name: &str) -> bool {
        let key = key_for_name(name);
        match self.store.delete(&key) {
            Ok(()) => {
                debug!("event=remove status=ok key={:?}", key);
                true
            }
            Err(e) => {
                error!("event=remove status=error key={:?} error={}", key, e);
                false
            }
        }
    }
}
