//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `serve` - Start the HTTP server
//! - `check` - Run the CPF or password validator on one value

pub mod args;

pub use args::{Cli, Commands};
