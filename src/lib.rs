//! Rusty du - summarize disk usage of a directory tree
//!
//! This crate provides:
//! - A recursive size aggregator with depth and threshold filtering
//! - `du`-style size formatting in KiB or auto-scaled binary units
//! - A command-line front end with an optional TOML configuration file

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod scanner;

// Re-export commonly used types
pub use config::Config;
pub use error::{DuError, Result};
