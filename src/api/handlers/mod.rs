//! HTTP request handlers.

pub mod auth_handler;
pub mod plant_handler;
pub mod user_handler;

pub use auth_handler::auth_routes;
pub use plant_handler::plant_routes;
pub use user_handler::user_routes;
