//! Display ordering of list items
//!
//! Items are shown unchecked first, then checked. Each group keeps its
//! storage order. The ordering exists only for display: records are always
//! written in storage order, and every displayed item carries its storage
//! index so actions on it map back to the right position.

use crate::domain::Item;

/// An item as shown, paired with its position in storage order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayItem<'a> {
    pub index: usize,
    pub item: &'a Item,
}

/// Stable partition of `items` into unchecked then checked
pub fn display_order(items: &[Item]) -> Vec<DisplayItem<'_>> {
    let indexed = items
        .iter()
        .enumerate()
        .map(|(index, item)| DisplayItem { index, item });

    let (mut unchecked, checked): (Vec<_>, Vec<_>) =
        indexed.partition(|entry| !entry.item.checked);
    unchecked.extend(checked);
    unchecked
}
