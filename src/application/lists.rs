//! List management use case

use crate::application::write_queue::{FlushReport, WriteQueue};
use crate::domain::{
    display_order, Action, DisplayItem, ListCollection, ListState, Outcome, TodoList,
    WritePolicy,
};
use crate::infrastructure::{FileStore, ListRepository};
use log::{debug, warn};

/// The interface the front end drives.
///
/// Every mutation is applied to the in-memory state first and then handed to
/// the write queue as one persistence effect. Under
/// [`WritePolicy::Immediate`] the queue is drained straight away.
pub struct ListService<S: FileStore> {
    repository: ListRepository<S>,
    state: ListState,
    queue: WriteQueue,
    policy: WritePolicy,
}

impl<S: FileStore> ListService<S> {
    /// Rebuild state from storage
    pub fn open(repository: ListRepository<S>, policy: WritePolicy) -> Self {
        let lists = repository.load_all();
        ListService {
            repository,
            state: ListState::new(lists),
            queue: WriteQueue::new(),
            policy,
        }
    }

    pub fn create_list(&mut self, name: &str) -> Outcome {
        self.apply(Action::CreateList {
            name: name.to_string(),
        })
    }

    pub fn delete_list(&mut self, index: usize) -> Outcome {
        self.apply(Action::DeleteList { index })
    }

    pub fn add_item(&mut self, list: usize, text: &str) -> Outcome {
        self.apply(Action::AddItem {
            list,
            text: text.to_string(),
        })
    }

    pub fn toggle_item(&mut self, list: usize, item: usize) -> Outcome {
        self.apply(Action::ToggleItem { list, item })
    }

    pub fn select(&mut self, index: usize) -> Outcome {
        self.apply(Action::Select { index })
    }

    pub fn clear_selection(&mut self) -> Outcome {
        self.apply(Action::ClearSelection)
    }

    fn apply(&mut self, action: Action) -> Outcome {
        let outcome = self.state.apply(action);

        match &outcome {
            Outcome::Applied(effect) => {
                self.queue.enqueue(effect.clone());
                if self.policy == WritePolicy::Immediate {
                    self.flush();
                }
            }
            Outcome::Rejected(reason) => {
                debug!("event=apply status=rejected reason=\"{}\"", reason);
            }
        }

        outcome
    }

    /// Write everything still queued
    pub fn flush(&mut self) -> FlushReport {
        let report = self.queue.drain(&self.repository);
        if !report.is_clean() {
            warn!(
                "event=flush status=partial written={} failed={}",
                report.written, report.failed
            );
        }
        report
    }

    pub fn pending_writes(&self) -> usize {
        self.queue.len()
    }

    pub fn lists(&self) -> &ListCollection {
        self.state.lists()
    }

    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    pub fn selected_list(&self) -> Option<&TodoList> {
        self.state.selected_list()
    }

    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.state.lists().position(name)
    }

    /// Items of the list at `index` in display order
    pub fn display_items(&self, index: usize) -> Option<Vec<DisplayItem<'_>>> {
        self.state
            .lists()
            .get(index)
            .map(|list| display_order(&list.items))
    }

    pub fn repository(&self) -> &ListRepository<S> {
        &self.repository
    }
}

impl<S: FileStore> Drop for ListService<S> {
    fn drop(&mut self) {
        if !self.queue.is_empty() {
            self.flush();
        }
    }
}
