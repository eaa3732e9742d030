//! Plant Care API - user management backend.
//!
//! The interesting logic lives in [`domain::validation`]: the CPF
//! check-digit validator and the password policy. The rest of the crate
//! is the web service that calls them on registration, lookup and
//! password changes, plus the plants each user owns and their care
//! history.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Validators, value objects, users and plants
//! - **services**: Application use cases
//! - **infra**: User and plant storage
//! - **api**: HTTP handlers, extractors and routes
//! - **types**: Shared HTTP types (pagination, responses)
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Check a single value
//! cargo run -- check cpf 12345678909
//! cargo run -- check password 'Abcdefg1'
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{is_valid_cpf, is_valid_password, Cpf, Password, User, UserRole};
pub use errors::{AppError, AppResult};
