//! checklist - Named to-do lists kept as one JSON file per list
//!
//! The in-memory collection of lists is rebuilt from a directory scan at
//! start-up and every change is written through as a full overwrite of the
//! affected list's file.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::ChecklistError;
