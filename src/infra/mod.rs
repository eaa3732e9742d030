//! Infrastructure layer - Storage behind the services

pub mod repositories;

pub use repositories::{InMemoryPlantStore, InMemoryUserStore, PlantRepository, UserRepository};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockPlantRepository, MockUserRepository};
