//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "checklist")]
#[command(about = "Named to-do lists stored as one JSON file per list", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new list store
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Show all lists
    Lists,

    /// Create a list and select it
    New {
        /// Name of the new list
        name: String,
    },

    /// Delete a list and its file
    Delete {
        /// List name or position
        list: String,
    },

    /// Select the list that item commands act on
    Select {
        /// List name or position
        list: String,
    },

    /// Add items to a list
    Add {
        /// List name or position (default: selected list)
        #[arg(short, long)]
        list: Option<String>,

        /// Item text, one item per argument
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Check or uncheck items
    Toggle {
        /// List name or position (default: selected list)
        #[arg(short, long)]
        list: Option<String>,

        /// Item positions as printed by `show`
        #[arg(required = true)]
        positions: Vec<usize>,
    },

    /// Show a list's items, open items first
    Show {
        /// List name or position (default: selected list)
        #[arg(short, long)]
        list: Option<String>,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
