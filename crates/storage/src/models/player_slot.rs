use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// One assignable position within one team of one match. `player_id` is NULL
/// while the slot is open. Slots only ever come into existence together with
/// their match.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct PlayerSlot {
    pub slot_id: Uuid,
    pub match_id: Uuid,
    pub team: i16,
    pub slot_number: i32,
    pub player_id: Option<Uuid>,
}
