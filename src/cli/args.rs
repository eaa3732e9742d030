//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};

/// Plant Care API - user management backend
#[derive(Parser, Debug)]
#[command(name = "plantcare-api")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),

    /// Run a validator against a single value
    Check(CheckArgs),
}

/// Arguments for the serve command.
///
/// Flags left out fall back to `SERVER_HOST` / `SERVER_PORT` from the
/// environment or `.env`, then to the built-in defaults.
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Host to bind to [default: 0.0.0.0]
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Port to listen on [default: 3000]
    #[arg(short, long)]
    pub port: Option<u16>,
}

/// Arguments for the check command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    #[command(subcommand)]
    pub target: CheckTarget,
}

/// Values that can be checked
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum CheckTarget {
    /// Check a CPF (eleven digits, no mask)
    Cpf {
        /// CPF to check
        value: String,
    },
    /// Check a password against the password policy
    Password {
        /// Password to check
        value: String,
    },
}
