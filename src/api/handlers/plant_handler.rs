//! Plant and care-action handlers.

use axum::{extract::State, response::Json, routing::get, Router};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::api::extractors::{ApiPath, ValidatedJson};
use crate::api::AppState;
use crate::domain::{deserialize_care_time, CareAction, CareKind, NewCareAction, NewPlant, Plant};
use crate::errors::AppResult;
use crate::types::Created;

/// Request to link a new plant to a user
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AddPlantRequest {
    /// Plant name
    #[validate(length(min = 1, message = "Plant name is required"))]
    #[schema(example = "Samambaia")]
    pub name: String,
    /// Botanical species, if known
    #[validate(length(min = 1, message = "Species cannot be empty"))]
    #[schema(example = "Nephrolepis exaltata")]
    pub species: Option<String>,
}

/// Request to record a care action
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RecordCareRequest {
    /// Kind of care: `poda`, `rega` or `adubo`
    pub kind: CareKind,
    /// Free-form notes
    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    #[schema(example = "Rega leve no fim da tarde")]
    pub description: Option<String>,
    /// When the care was performed; a date or an RFC 3339 timestamp
    #[serde(deserialize_with = "deserialize_care_time")]
    #[schema(value_type = String, example = "2025-12-24")]
    pub performed_at: DateTime<Utc>,
}

/// Create plant routes
pub fn plant_routes() -> Router<AppState> {
    Router::new()
        .route("/:id", get(get_plant))
        .route("/:id/actions", get(care_history).post(record_care))
}

/// Link a new plant to a user
#[utoipa::path(
    post,
    path = "/users/{id}/plants",
    tag = "Plants",
    params(
        ("id" = Uuid, Path, description = "Owner user ID")
    ),
    request_body = AddPlantRequest,
    responses(
        (status = 201, description = "Plant linked to the user", body = Plant),
        (status = 400, description = "Validation error"),
        (status = 404, description = "User not found")
    )
)]
pub async fn add_plant(
    State(state): State<AppState>,
    ApiPath(owner_id): ApiPath<Uuid>,
    ValidatedJson(payload): ValidatedJson<AddPlantRequest>,
) -> AppResult<Created<Plant>> {
    let plant = state
        .plant_service
        .add_plant(
            owner_id,
            NewPlant {
                name: payload.name,
                species: payload.species,
            },
        )
        .await?;

    Ok(Created(plant))
}

/// List the plants owned by a user
#[utoipa::path(
    get,
    path = "/users/{id}/plants",
    tag = "Plants",
    params(
        ("id" = Uuid, Path, description = "Owner user ID")
    ),
    responses(
        (status = 200, description = "Plants owned by the user", body = Vec<Plant>),
        (status = 404, description = "User not found")
    )
)]
pub async fn list_user_plants(
    State(state): State<AppState>,
    ApiPath(owner_id): ApiPath<Uuid>,
) -> AppResult<Json<Vec<Plant>>> {
    let plants = state.plant_service.list_plants(owner_id).await?;
    Ok(Json(plants))
}

/// Get plant by ID
#[utoipa::path(
    get,
    path = "/plants/{id}",
    tag = "Plants",
    params(
        ("id" = Uuid, Path, description = "Plant ID")
    ),
    responses(
        (status = 200, description = "Plant", body = Plant),
        (status = 404, description = "Plant not found")
    )
)]
pub async fn get_plant(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> AppResult<Json<Plant>> {
    let plant = state.plant_service.get_plant(id).await?;
    Ok(Json(plant))
}

/// Record a care action for a plant
#[utoipa::path(
    post,
    path = "/plants/{id}/actions",
    tag = "Plants",
    params(
        ("id" = Uuid, Path, description = "Plant ID")
    ),
    request_body = RecordCareRequest,
    responses(
        (status = 201, description = "Care action recorded", body = CareAction),
        (status = 400, description = "Unknown kind or missing/invalid performed_at"),
        (status = 404, description = "Plant not found")
    )
)]
pub async fn record_care(
    State(state): State<AppState>,
    ApiPath(plant_id): ApiPath<Uuid>,
    ValidatedJson(payload): ValidatedJson<RecordCareRequest>,
) -> AppResult<Created<CareAction>> {
    let action = state
        .plant_service
        .record_care(
            plant_id,
            NewCareAction {
                kind: payload.kind,
                description: payload.description,
                performed_at: payload.performed_at,
            },
        )
        .await?;

    Ok(Created(action))
}

/// Care history of a plant, most recent first
#[utoipa::path(
    get,
    path = "/plants/{id}/actions",
    tag = "Plants",
    params(
        ("id" = Uuid, Path, description = "Plant ID")
    ),
    responses(
        (status = 200, description = "Care history", body = Vec<CareAction>),
        (status = 404, description = "Plant not found")
    )
)]
pub async fn care_history(
    State(state): State<AppState>,
    ApiPath(plant_id): ApiPath<Uuid>,
) -> AppResult<Json<Vec<CareAction>>> {
    let history = state.plant_service.care_history(plant_id).await?;
    Ok(Json(history))
}
