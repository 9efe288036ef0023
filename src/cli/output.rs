//! Output formatting utilities

use crate::domain::{DisplayItem, ListCollection};

/// Format the list overview, marking the selected list with `*`
pub fn format_list_overview(lists: &ListCollection, selected: Option<usize>) -> String {
    if lists.is_empty() {
        return "No lists found".to_string();
    }

    let mut output = String::new();
    for (index, list) in lists.iter().enumerate() {
        let marker = if selected == Some(index) { '*' } else { ' ' };
        output.push_str(&format!(
            "{} {}. {} ({} of {} open)\n",
            marker,
            index + 1,
            list.name,
            list.open_count(),
            list.items.len()
        ));
    }
    output
}

/// Format items in display order. Positions are storage positions so they
/// can be passed straight back to `toggle`.
pub fn format_items(name: &str, items: &[DisplayItem<'_>]) -> String {
    let mut output = format!("{}\n", name);

    if items.is_empty() {
        output.push_str("  (no items)\n");
        return output;
    }

    for entry in items {
        let mark = if entry.item.checked { 'x' } else { ' ' };
        output.push_str(&format!(
            "  {}. [{}] {}\n",
            entry.index + 1,
            mark,
            entry.item.text
        ));
    }
    output
}
