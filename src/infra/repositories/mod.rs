//! Repository layer - Data access abstraction
//!
//! Services only see the repository traits; the in-memory stores are the
//! implementations shipped with the server.

mod plant_repository;
mod user_repository;

pub use plant_repository::{InMemoryPlantStore, PlantRepository};
pub use user_repository::{InMemoryUserStore, UserRepository};

#[cfg(any(test, feature = "test-utils"))]
pub use plant_repository::MockPlantRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
