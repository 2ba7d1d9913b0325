use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub user_id: Uuid,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub nickname: Option<String>,
    pub date_of_birth: Option<chrono::NaiveDate>,
    pub gender: Option<String>,
    pub weight: Option<Decimal>,
    pub weight_unit: Option<String>,
    pub height: Option<Decimal>,
    pub height_unit: Option<String>,
    pub country: Option<String>,
    pub disability: bool,
    pub created_at: chrono::NaiveDateTime,
}
