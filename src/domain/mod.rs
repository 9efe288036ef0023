//! Domain layer - List models, state transitions and ordering

pub mod collection;
pub mod list;
pub mod ordering;
pub mod storage_key;
pub mod write_policy;

pub use collection::{Action, Effect, ListState, Outcome, Rejection};
pub use list::{Item, ListCollection, TodoList};
pub use ordering::{display_order, DisplayItem};
pub use write_policy::WritePolicy;
