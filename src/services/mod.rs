//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and the repository to fulfill
//! application use cases. They depend on the repository traits, not on
//! a concrete store.

mod account_service;
pub mod container;
mod plant_service;
mod user_service;

pub use container::{ServiceContainer, Services};

pub use account_service::{AccountService, Accounts};
pub use plant_service::{PlantManager, PlantService};
pub use user_service::{UserManager, UserService};
