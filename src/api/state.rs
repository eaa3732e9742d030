//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::services::{AccountService, PlantService, ServiceContainer, Services, UserService};

/// Application state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    /// Registration and password changes
    pub account_service: Arc<dyn AccountService>,
    /// Lookups and profile updates
    pub user_service: Arc<dyn UserService>,
    /// Plants and care history
    pub plant_service: Arc<dyn PlantService>,
}

impl AppState {
    /// Create application state from a service container.
    pub fn from_services(services: &dyn ServiceContainer) -> Self {
        Self {
            account_service: services.accounts(),
            user_service: services.users(),
            plant_service: services.plants(),
        }
    }

    /// Application state over fresh in-memory stores.
    pub fn in_memory() -> Self {
        Self::from_services(&Services::in_memory())
    }
}
