//! Application layer - Use cases and orchestration

pub mod init;
pub mod lists;
pub mod write_queue;

pub use lists::ListService;
pub use write_queue::{FlushReport, WriteQueue};
