//! In-memory list state and its transitions
//!
//! Every change to the lists goes through [`ListState::apply`]. The
//! transition is computed entirely in memory and returns the persistence
//! [`Effect`] the caller must carry out; no I/O happens here.

use crate::domain::{Item, ListCollection, TodoList};
use std::fmt;

/// A user intent against the list state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    CreateList { name: String },
    DeleteList { index: usize },
    AddItem { list: usize, text: String },
    ToggleItem { list: usize, item: usize },
    Select { index: usize },
    ClearSelection,
}

/// Persistence work produced by a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Overwrite the record for `name` with the complete item sequence
    Save { name: String, items: Vec<Item> },
    /// Delete the record for `name`
    Remove { name: String },
    None,
}

impl Effect {
    /// Name of the list whose record this effect touches
    pub fn list_name(&self) -> Option<&str> {
        match self {
            Effect::Save { name, .. } | Effect::Remove { name } => Some(name),
            Effect::None => None,
        }
    }
}

/// Why an action was not applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    BlankName,
    DuplicateName(String),
    BlankText,
    NoSuchList(usize),
    NoSuchItem { list: usize, item: usize },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::BlankName => write!(f, "list name is empty"),
            Rejection::DuplicateName(name) => write!(f, "a list named '{}' already exists", name),
            Rejection::BlankText => write!(f, "item text is empty"),
            Rejection::NoSuchList(index) => write!(f, "no list at position {}", index + 1),
            Rejection::NoSuchItem { item, .. } => write!(f, "no item at position {}", item + 1),
        }
    }
}

/// Result of applying an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Applied(Effect),
    Rejected(Rejection),
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied(_))
    }
}

/// The collection of lists together with the currently open list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListState {
    lists: ListCollection,
    selected: Option<usize>,
}

impl ListState {
    pub fn new(lists: ListCollection) -> Self {
        ListState {
            lists,
            selected: None,
        }
    }

    pub fn lists(&self) -> &ListCollection {
        &self.lists
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_list(&self) -> Option<&TodoList> {
        self.selected.and_then(|index| self.lists.get(index))
    }

    /// Apply an action, returning the effect to persist.
    ///
    /// A rejected action leaves the state untouched.
    pub fn apply(&mut self, action: Action) -> Outcome {
        match action {
            Action::CreateList { name } => self.create_list(&name),
            Action::DeleteList { index } => self.delete_list(index),
            Action::AddItem { list, text } => self.add_item(list, &text),
            Action::ToggleItem { list, item } => self.toggle_item(list, item),
            Action::Select { index } => {
                if index >= self.lists.len() {
                    return Outcome::Rejected(Rejection::NoSuchList(index));
                }
                self.selected = Some(index);
                Outcome::Applied(Effect::None)
            }
            Action::ClearSelection => {
                self.selected = None;
                Outcome::Applied(Effect::None)
            }
        }
    }

    fn create_list(&mut self, name: &str) -> Outcome {
        let name = name.trim();
        if name.is_empty() {
            return Outcome::Rejected(Rejection::BlankName);
        }
        if self.lists.conflicts_with(name) {
            return Outcome::Rejected(Rejection::DuplicateName(name.to_string()));
        }

        self.lists.push(TodoList::new(name));
        self.selected = Some(self.lists.len() - 1);

        Outcome::Applied(Effect::Save {
            name: name.to_string(),
            items: Vec::new(),
        })
    }

    fn delete_list(&mut self, index: usize) -> Outcome {
        if index >= self.lists.len() {
            return Outcome::Rejected(Rejection::NoSuchList(index));
        }

        let removed = self.lists.remove(index);
        self.selected = match self.selected {
            Some(selected) if selected == index => None,
            Some(selected) if selected > index => Some(selected - 1),
            other => other,
        };

        Outcome::Applied(Effect::Remove { name: removed.name })
    }

    fn add_item(&mut self, list: usize, text: &str) -> Outcome {
        let text = text.trim();
        if text.is_empty() {
            return Outcome::Rejected(Rejection::BlankText);
        }
        let Some(target) = self.lists.get_mut(list) else {
            return Outcome::Rejected(Rejection::NoSuchList(list));
        };

        target.items.push(Item::new(text));

        Outcome::Applied(Effect::Save {
            name: target.name.clone(),
            items: target.items.clone(),
        })
    }

    fn toggle_item(&mut self, list: usize, item: usize) -> Outcome {
        let Some(target) = self.lists.get_mut(list) else {
            return Outcome::Rejected(Rejection::NoSuchList(list));
        };
        let Some(entry) = target.items.get_mut(item) else {
            return Outcome::Rejected(Rejection::NoSuchItem { list, item });
        };

        entry.checked = !entry.checked;

        Outcome::Applied(Effect::Save {
            name: target.name.clone(),
            items: target.items.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(names: &[&str]) -> ListState {
        ListState::new(names.iter().map(|n| TodoList::new(*n)).collect())
    }

    #[test]
    fn test_create_list_appends_and_selects() {
        let mut state = ListState::default();

        let outcome = state.apply(Action::CreateList {
            name: "Groceries".to_string(),
        });

        assert_eq!(
            outcome,
            Outcome::Applied(Effect::Save {
                name: "Groceries".to_string(),
                items: vec![],
            })
        );
        assert_eq!(state.lists().len(), 1);
        assert_eq!(state.selected(), Some(0));
        assert_eq!(state.selected_list().unwrap().name, "Groceries");
    }

    #[test]
    fn test_create_list_trims_name() {
        let mut state = ListState::default();
        state.apply(Action::CreateList {
            name: "  Chores \n".to_string(),
        });
        assert_eq!(state.lists().get(0).unwrap().name, "Chores");
    }

    #[test]
    fn test_create_blank_list_is_rejected() {
        let mut state = state_with(&["Work"]);
        state.apply(Action::Select { index: 0 });
        let before = state.clone();

        let outcome = state.apply(Action::CreateList {
            name: "   ".to_string(),
        });

        assert_eq!(outcome, Outcome::Rejected(Rejection::BlankName));
        assert_eq!(state, before);
    }

    #[test]
    fn test_create_duplicate_is_rejected() {
        let mut state = state_with(&["Groceries"]);
        let outcome = state.apply(Action::CreateList {
            name: "groceries".to_string(),
        });

        assert_eq!(
            outcome,
            Outcome::Rejected(Rejection::DuplicateName("groceries".to_string()))
        );
        assert_eq!(state.lists().len(), 1);
    }

    #[test]
    fn test_new_lists_append_in_insertion_order() {
        let mut state = ListState::default();
        for name in ["Zebra", "Apple", "Mango"] {
            state.apply(Action::CreateList {
                name: name.to_string(),
            });
        }
        let names: Vec<&str> = state.lists().iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Zebra", "Apple", "Mango"]);
        assert_eq!(state.selected(), Some(2));
    }

    #[test]
    fn test_delete_selected_clears_selection() {
        let mut state = state_with(&["a", "b", "c"]);
        state.apply(Action::Select { index: 1 });

        let outcome = state.apply(Action::DeleteList { index: 1 });

        assert_eq!(
            outcome,
            Outcome::Applied(Effect::Remove {
                name: "b".to_string()
            })
        );
        assert_eq!(state.selected(), None);
        assert_eq!(state.lists().len(), 2);
    }

    #[test]
    fn test_delete_before_selection_shifts_it() {
        let mut state = state_with(&["a", "b", "c"]);
        state.apply(Action::Select { index: 2 });

        state.apply(Action::DeleteList { index: 0 });

        assert_eq!(state.selected(), Some(1));
        assert_eq!(state.selected_list().unwrap().name, "c");
    }

    #[test]
    fn test_delete_after_selection_leaves_it() {
        let mut state = state_with(&["a", "b", "c"]);
        state.apply(Action::Select { index: 0 });

        state.apply(Action::DeleteList { index: 2 });

        assert_eq!(state.selected(), Some(0));
        assert_eq!(state.selected_list().unwrap().name, "a");
    }

    #[test]
    fn test_delete_without_selection() {
        let mut state = state_with(&["a", "b"]);
        state.apply(Action::DeleteList { index: 0 });
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_delete_out_of_range_is_rejected() {
        let mut state = state_with(&["a"]);
        let outcome = state.apply(Action::DeleteList { index: 1 });
        assert_eq!(outcome, Outcome::Rejected(Rejection::NoSuchList(1)));
        assert_eq!(state.lists().len(), 1);
    }

    #[test]
    fn test_add_item_saves_full_sequence() {
        let mut state = state_with(&["Groceries"]);
        state.apply(Action::AddItem {
            list: 0,
            text: "Milk".to_string(),
        });

        let outcome = state.apply(Action::AddItem {
            list: 0,
            text: " Eggs ".to_string(),
        });

        assert_eq!(
            outcome,
            Outcome::Applied(Effect::Save {
                name: "Groceries".to_string(),
                items: vec![Item::new("Milk"), Item::new("Eggs")],
            })
        );
    }

    #[test]
    fn test_add_blank_item_is_rejected() {
        let mut state = state_with(&["Groceries"]);
        let outcome = state.apply(Action::AddItem {
            list: 0,
            text: "\t".to_string(),
        });
        assert_eq!(outcome, Outcome::Rejected(Rejection::BlankText));
        assert!(state.lists().get(0).unwrap().items.is_empty());
    }

    #[test]
    fn test_add_item_to_missing_list_is_rejected() {
        let mut state = ListState::default();
        let outcome = state.apply(Action::AddItem {
            list: 0,
            text: "Milk".to_string(),
        });
        assert_eq!(outcome, Outcome::Rejected(Rejection::NoSuchList(0)));
    }

    #[test]
    fn test_toggle_flips_only_target() {
        let mut state = state_with(&["Groceries"]);
        for text in ["Milk", "Eggs", "Bread"] {
            state.apply(Action::AddItem {
                list: 0,
                text: text.to_string(),
            });
        }

        let outcome = state.apply(Action::ToggleItem { list: 0, item: 1 });

        assert_eq!(
            outcome,
            Outcome::Applied(Effect::Save {
                name: "Groceries".to_string(),
                items: vec![Item::new("Milk"), Item::checked("Eggs"), Item::new("Bread")],
            })
        );

        state.apply(Action::ToggleItem { list: 0, item: 1 });
        assert!(!state.lists().get(0).unwrap().items[1].checked);
    }

    #[test]
    fn test_toggle_missing_item_is_rejected() {
        let mut state = state_with(&["Groceries"]);
        let outcome = state.apply(Action::ToggleItem { list: 0, item: 0 });
        assert_eq!(
            outcome,
            Outcome::Rejected(Rejection::NoSuchItem { list: 0, item: 0 })
        );
    }

    #[test]
    fn test_select_and_clear() {
        let mut state = state_with(&["a", "b"]);
        assert_eq!(
            state.apply(Action::Select { index: 1 }),
            Outcome::Applied(Effect::None)
        );
        assert_eq!(state.selected(), Some(1));

        assert_eq!(
            state.apply(Action::Select { index: 5 }),
            Outcome::Rejected(Rejection::NoSuchList(5))
        );
        assert_eq!(state.selected(), Some(1));

        state.apply(Action::ClearSelection);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_effect_list_name() {
        let save = Effect::Save {
            name: "a".to_string(),
            items: vec![],
        };
        assert_eq!(save.list_name(), Some("a"));
        assert_eq!(Effect::None.list_name(), None);
    }
}
