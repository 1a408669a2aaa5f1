//! Core utilities for the football CLI
//!
//! - `fs`: config-directory paths and atomic file writes
//! - `config`: the persisted API key

pub mod config;
pub mod fs;

// Re-export commonly used items for convenience
pub use config::Config;
pub use fs::{try_read_to_string, write_atomic, Access, AppPaths};
