//! Single-writer queue for record writes
//!
//! Holds at most one pending effect per storage key. Queuing a second effect
//! for a key replaces the first and moves the key to the back of the line, so
//! two quick changes to one list reach storage as a single full overwrite
//! carrying the newest items, and the last change made is the last applied.

use crate::domain::storage_key::key_for_name;
use crate::domain::Effect;
use crate::infrastructure::{FileStore, ListRepository};
use log::debug;
use std::collections::{HashMap, VecDeque};

/// Counts from one drain of the queue
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlushReport {
    pub written: usize,
    pub failed: usize,
}

impl FlushReport {
    pub fn is_clean(&self) -> bool {
        self.failed == 0
    }
}

#[derive(Debug, Default)]
pub struct WriteQueue {
    order: VecDeque<String>,
    pending: HashMap<String, Effect>,
}

impl WriteQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Queue an effect, replacing any effect still waiting for the same list
    pub fn enqueue(&mut self, effect: Effect) {
        let Some(name) = effect.list_name() else {
            return;
        };
        let key = key_for_name(name);

        if self.pending.insert(key.clone(), effect).is_some() {
            debug!("event=enqueue status=superseded key={:?}", key);
            self.order.retain(|queued| *queued != key);
        }
        self.order.push_back(key);
    }

    /// Carry out every queued effect in arrival order
    pub fn drain<S: FileStore>(&mut self, repository: &ListRepository<S>) -> FlushReport {
        let mut report = FlushReport::default();

        while let Some(key) = self.order.pop_front() {
            let Some(effect) = self.pending.remove(&key) else {
                continue;
            };
            let ok = match &effect {
                Effect::Save { name, items } => repository.save(name, items),
                Effect::Remove { name } => repository.remove(name),
                Effect::None => continue,
            };
            if ok {
                report.written += 1;
            } else {
                report.failed += 1;
            }
        }

        report
    }
}
