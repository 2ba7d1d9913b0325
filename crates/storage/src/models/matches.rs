use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A scheduled game with two teams of `player_count` players each.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Match {
    pub match_id: Uuid,
    pub place: String,
    pub location_coordinates: Option<String>,
    pub date_time: DateTime<Utc>,
    pub player_count: i32,
    pub formation: Option<String>,
    pub field_type: Option<String>,
    pub created_at: chrono::NaiveDateTime,
}
