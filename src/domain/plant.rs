//! Plants owned by users and the care actions recorded for them.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Kinds of care that can be recorded for a plant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum CareKind {
    #[serde(rename = "poda")]
    Pruning,
    #[serde(rename = "rega")]
    Watering,
    #[serde(rename = "adubo")]
    Fertilizing,
}

impl std::fmt::Display for CareKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CareKind::Pruning => write!(f, "poda"),
            CareKind::Watering => write!(f, "rega"),
            CareKind::Fertilizing => write!(f, "adubo"),
        }
    }
}

/// A plant linked to the user who owns it
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Plant {
    #[schema(example = "6f1c2a3e-8d4b-4f5a-9c7e-1b2d3e4f5a6b")]
    pub id: Uuid,
    pub owner_id: Uuid,
    #[schema(example = "Samambaia")]
    pub name: String,
    #[schema(example = "Nephrolepis exaltata")]
    pub species: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Plant {
    pub fn new(owner_id: Uuid, name: String, species: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner_id,
            name,
            species,
            created_at: Utc::now(),
        }
    }
}

/// Plant creation data
#[derive(Debug, Clone, Deserialize)]
pub struct NewPlant {
    pub name: String,
    pub species: Option<String>,
}

/// One recorded care action
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CareAction {
    pub id: Uuid,
    pub plant_id: Uuid,
    pub kind: CareKind,
    #[schema(example = "Rega leve no fim da tarde")]
    pub description: Option<String>,
    /// When the care was performed
    pub performed_at: DateTime<Utc>,
    /// When the action was recorded
    pub recorded_at: DateTime<Utc>,
}

impl CareAction {
    pub fn new(plant_id: Uuid, data: NewCareAction) -> Self {
        Self {
            id: Uuid::new_v4(),
            plant_id,
            kind: data.kind,
            description: data.description,
            performed_at: data.performed_at,
            recorded_at: Utc::now(),
        }
    }
}

/// Care action data, as received from the request layer
#[derive(Debug, Clone, Deserialize)]
pub struct NewCareAction {
    pub kind: CareKind,
    pub description: Option<String>,
    pub performed_at: DateTime<Utc>,
}

/// Parse the moment a care action happened.
///
/// Accepts RFC 3339 (`2025-12-24T08:30:00Z`), a naive date-time taken as
/// UTC (`2025-12-24T08:30:00`), or a bare date taken as midnight UTC
/// (`2025-12-24`).
///
/// ```
/// use plantcare_api::domain::parse_care_time;
///
/// assert!(parse_care_time("2025-12-24").is_some());
/// assert!(parse_care_time("24/12/2025").is_none());
/// ```
pub fn parse_care_time(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Some(at.with_timezone(&Utc));
    }
    if let Ok(at) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(at.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|at| at.and_utc())
}

/// Serde adapter for fields read with [`parse_care_time`].
pub fn deserialize_care_time<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_care_time(&raw).ok_or_else(|| {
        serde::de::Error::custom(format!(
            "invalid performed_at `{}`, expected YYYY-MM-DD or an RFC 3339 timestamp",
            raw
        ))
    })
}
