//! Playlister CLI Library
//!
//! Configuration, the offline demo store and the interactive editing loop
//! behind the `playlister` binary.

pub mod config;
pub mod demo;
pub mod error;
pub mod repl;

// Re-export commonly used types for convenience
pub use config::CliConfig;
pub use error::{CliError, Result};
