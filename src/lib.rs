//! dirtree - Print a directory hierarchy as an ASCII tree
//!
//! Directories are listed before files, each group sorted by name, with
//! dependency/cache/VCS folders skipped by default. Unreadable directories
//! are reported inline without stopping the walk.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod signals;
pub mod tree;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, TreeError};
pub use tree::{render_tree, RenderedTree, TreeOptions, TreeRenderer};
