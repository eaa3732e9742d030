//! Plant service - Plants linked to users and their care history.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{CareAction, NewCareAction, NewPlant, Plant};
use crate::errors::{AppResult, OptionExt};
use crate::infra::{PlantRepository, UserRepository};

/// Plant service trait for dependency injection.
#[async_trait]
pub trait PlantService: Send + Sync {
    /// Link a new plant to an existing user
    async fn add_plant(&self, owner_id: Uuid, data: NewPlant) -> AppResult<Plant>;

    /// Plants owned by a user
    async fn list_plants(&self, owner_id: Uuid) -> AppResult<Vec<Plant>>;

    /// Get plant by ID
    async fn get_plant(&self, id: Uuid) -> AppResult<Plant>;

    /// Record a care action for a plant
    async fn record_care(&self, plant_id: Uuid, data: NewCareAction) -> AppResult<CareAction>;

    /// Care history of a plant, most recent first
    async fn care_history(&self, plant_id: Uuid) -> AppResult<Vec<CareAction>>;
}

/// Concrete implementation of PlantService.
pub struct PlantManager {
    users: Arc<dyn UserRepository>,
    plants: Arc<dyn PlantRepository>,
}

impl PlantManager {
    /// Create new plant service instance
    pub fn new(users: Arc<dyn UserRepository>, plants: Arc<dyn PlantRepository>) -> Self {
        Self { users, plants }
    }

    async fn ensure_owner(&self, owner_id: Uuid) -> AppResult<()> {
        self.users.find_by_id(owner_id).await?.ok_or_not_found()?;
        Ok(())
    }
}

#[async_trait]
impl PlantService for PlantManager {
    async fn add_plant(&self, owner_id: Uuid, data: NewPlant) -> AppResult<Plant> {
        self.ensure_owner(owner_id).await?;

        let plant = self
            .plants
            .create(Plant::new(owner_id, data.name, data.species))
            .await?;

        tracing::info!(plant_id = %plant.id, owner_id = %owner_id, "Plant added");
        Ok(plant)
    }

    async fn list_plants(&self, owner_id: Uuid) -> AppResult<Vec<Plant>> {
        self.ensure_owner(owner_id).await?;
        self.plants.list_by_owner(owner_id).await
    }

    async fn get_plant(&self, id: Uuid) -> AppResult<Plant> {
        self.plants.find_by_id(id).await?.ok_or_not_found()
    }

    async fn record_care(&self, plant_id: Uuid, data: NewCareAction) -> AppResult<CareAction> {
        self.get_plant(plant_id).await?;

        let action = self.plants.add_action(CareAction::new(plant_id, data)).await?;

        tracing::info!(
            plant_id = %plant_id,
            kind = %action.kind,
            performed_at = %action.performed_at,
            "Care action recorded"
        );
        Ok(action)
    }

    async fn care_history(&self, plant_id: Uuid) -> AppResult<Vec<CareAction>> {
        self.get_plant(plant_id).await?;
        self.plants.list_actions(plant_id).await
    }
}
