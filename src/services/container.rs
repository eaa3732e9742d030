//! Service Container - Centralized service access.
//!
//! Wires every service from shared repositories so the HTTP layer and
//! the tests build the same object graph.

use std::sync::Arc;

use super::{AccountService, Accounts, PlantManager, PlantService, UserManager, UserService};
use crate::infra::{InMemoryPlantStore, InMemoryUserStore, PlantRepository, UserRepository};

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get account service
    fn accounts(&self) -> Arc<dyn AccountService>;

    /// Get user service
    fn users(&self) -> Arc<dyn UserService>;

    /// Get plant service
    fn plants(&self) -> Arc<dyn PlantService>;
}

/// Concrete implementation of ServiceContainer
#[derive(Clone)]
pub struct Services {
    account_service: Arc<dyn AccountService>,
    user_service: Arc<dyn UserService>,
    plant_service: Arc<dyn PlantService>,
}

impl Services {
    /// Create a service container on top of the repositories
    pub fn from_repositories(
        users: Arc<dyn UserRepository>,
        plants: Arc<dyn PlantRepository>,
    ) -> Self {
        Self {
            account_service: Arc::new(Accounts::new(users.clone())),
            user_service: Arc::new(UserManager::new(users.clone())),
            plant_service: Arc::new(PlantManager::new(users, plants)),
        }
    }

    /// Create a service container backed by fresh in-memory stores
    pub fn in_memory() -> Self {
        Self::from_repositories(
            Arc::new(InMemoryUserStore::new()),
            Arc::new(InMemoryPlantStore::new()),
        )
    }
}

impl ServiceContainer for Services {
    fn accounts(&self) -> Arc<dyn AccountService> {
        self.account_service.clone()
    }

    fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }

    fn plants(&self) -> Arc<dyn PlantService> {
        self.plant_service.clone()
    }
}
