//! List and item models

use serde::{Deserialize, Serialize};

/// A single task within a list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub text: String,
    pub checked: bool,
}

impl Item {
    /// Create a new unchecked item
    pub fn new(text: impl Into<String>) -> Self {
        Item {
            text: text.into(),
            checked: false,
        }
    }

    /// Create an item that is already checked
    pub fn checked(text: impl Into<String>) -> Self {
        Item {
            text: text.into(),
            checked: true,
        }
    }
}

/// A named, ordered collection of items persisted as one record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoList {
    pub name: String,
    pub items: Vec<Item>,
}

impl TodoList {
    pub fn new(name: impl Into<String>) -> Self {
        TodoList {
            name: name.into(),
            items: Vec::new(),
        }
    }

    pub fn with_items(name: impl Into<String>, items: Vec<Item>) -> Self {
        TodoList {
            name: name.into(),
            items,
        }
    }

    /// Number of items not yet checked
    pub fn open_count(&self) -> usize {
        self.items.iter().filter(|item| !item.checked).count()
    }
}

/// Insertion-ordered set of lists. New lists append; order is never re-sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListCollection {
    lists: Vec<TodoList>,
}

impl ListCollection {
    pub fn new() -> Self {
        ListCollection { lists: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TodoList> {
        self.lists.get(index)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut TodoList> {
        self.lists.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TodoList> {
        self.lists.iter()
    }

    /// Position of the list with exactly this name
    pub fn position(&self, name: &str) -> Option<usize> {
        self.lists.iter().position(|list| list.name == name)
    }

    /// Whether a list name would collide with an existing one.
    ///
    /// Comparison ignores case so two lists never share a record on a
    /// case-insensitive filesystem.
    pub fn conflicts_with(&self, name: &str) -> bool {
        let wanted = name.to_lowercase();
        self.lists
            .iter()
            .any(|list| list.name.to_lowercase() == wanted)
    }

    pub fn push(&mut self, list: TodoList) {
        self.lists.push(list);
    }

    pub(crate) fn remove(&mut self, index: usize) -> TodoList {
        self.lists.remove(index)
    }
}

impl FromIterator<TodoList> for ListCollection {
    fn from_iter<I: IntoIterator<Item = TodoList>>(iter: I) -> Self {
        ListCollection {
            lists: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ListCollection {
    type Item = &'a TodoList;
    type IntoIter = std::slice::Iter<'a, TodoList>;

    fn into_iter(self) -> Self::IntoIter {
        self.lists.iter()
    }
}
