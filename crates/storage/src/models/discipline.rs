use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A user's sport-specific skill profile. Only the rating columns that make
/// sense for the sport are filled in, the rest stay NULL.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Discipline {
    pub discipline_id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub favorite_position: Option<String>,
    pub dominant_foot: Option<String>,
    pub pace: Option<i16>,
    pub defending: Option<i16>,
    pub shooting: Option<i16>,
    pub passing: Option<i16>,
    pub dribbling: Option<i16>,
    pub arm: Option<i16>,
    pub chest: Option<i16>,
    pub back: Option<i16>,
    pub leg: Option<i16>,
    pub strength: Option<i16>,
    pub resistance: Option<i16>,
    pub max_distance: Option<Decimal>,
    pub pace_avg: Option<Decimal>,
    pub level: Option<i16>,
    pub forehand: Option<i16>,
    pub backhand: Option<i16>,
    pub tennis_level: Option<i16>,
    pub created_at: chrono::NaiveDateTime,
}
