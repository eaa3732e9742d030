//! Plant repository with an in-memory backing store.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{CareAction, Plant};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Plant repository trait for dependency injection.
///
/// Owner existence is checked by the service layer; the repository only
/// guarantees that actions are attached to stored plants.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait PlantRepository: Send + Sync {
    /// Find plant by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Plant>>;

    /// Insert a new plant
    async fn create(&self, plant: Plant) -> AppResult<Plant>;

    /// Plants owned by a user, oldest first
    async fn list_by_owner(&self, owner_id: Uuid) -> AppResult<Vec<Plant>>;

    /// Append a care action to a stored plant
    async fn add_action(&self, action: CareAction) -> AppResult<CareAction>;

    /// Care history of a plant, most recent first
    async fn list_actions(&self, plant_id: Uuid) -> AppResult<Vec<CareAction>>;
}

/// In-memory implementation of PlantRepository
#[derive(Default)]
pub struct InMemoryPlantStore {
    plants: RwLock<HashMap<Uuid, Plant>>,
    actions: RwLock<HashMap<Uuid, Vec<CareAction>>>,
}

impl InMemoryPlantStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PlantRepository for InMemoryPlantStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Plant>> {
        Ok(self.plants.read().await.get(&id).cloned())
    }

    async fn create(&self, plant: Plant) -> AppResult<Plant> {
        let mut plants = self.plants.write().await;
        if plants.contains_key(&plant.id) {
            return Err(AppError::conflict("Plant"));
        }

        plants.insert(plant.id, plant.clone());
        Ok(plant)
    }

    async fn list_by_owner(&self, owner_id: Uuid) -> AppResult<Vec<Plant>> {
        let plants = self.plants.read().await;
        let mut owned: Vec<Plant> = plants
            .values()
            .filter(|p| p.owner_id == owner_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(owned)
    }

    async fn add_action(&self, action: CareAction) -> AppResult<CareAction> {
        if !self.plants.read().await.contains_key(&action.plant_id) {
            return Err(AppError::NotFound);
        }

        self.actions
            .write()
            .await
            .entry(action.plant_id)
            .or_default()
            .push(action.clone());
        Ok(action)
    }

    async fn list_actions(&self, plant_id: Uuid) -> AppResult<Vec<CareAction>> {
        let actions = self.actions.read().await;
        let mut history = actions.get(&plant_id).cloned().unwrap_or_default();
        history.sort_by(|a, b| {
            b.performed_at
                .cmp(&a.performed_at)
                .then(b.recorded_at.cmp(&a.recorded_at))
        });
        Ok(history)
    }
}
