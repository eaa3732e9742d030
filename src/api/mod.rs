//! API layer - HTTP handlers and routing
//!
//! Request DTOs are checked by `ValidatedJson` before a handler runs;
//! CPF and password fields go through the domain validators via
//! the adapters in [`validators`].

pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;
pub mod validators;

pub use openapi::ApiDoc;
pub use routes::create_router;
pub use state::AppState;
