//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod logging;
pub mod repository;
pub mod store;
pub mod ui_state;

pub use config::Config;
pub use repository::ListRepository;
pub use store::{DirectoryStore, FileStore, MemoryStore};
pub use ui_state::UiState;
