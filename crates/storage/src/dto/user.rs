use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Request payload for registering a new user
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    #[validate(length(
        min = 1,
        max = 150,
        message = "Username must be between 1 and 150 characters"
    ))]
    pub username: String,

    #[validate(length(
        min = 1,
        max = 150,
        message = "First name must be between 1 and 150 characters"
    ))]
    pub first_name: String,

    #[validate(length(
        min = 1,
        max = 150,
        message = "Last name must be between 1 and 150 characters"
    ))]
    pub last_name: String,

    #[validate(email(message = "Email must be a valid address"))]
    pub email: String,

    #[validate(length(max = 150))]
    pub nickname: Option<String>,

    pub date_of_birth: Option<NaiveDate>,

    #[validate(custom(function = "validate_gender"))]
    pub gender: Option<String>,

    pub weight: Option<Decimal>,

    #[validate(custom(function = "validate_weight_unit"))]
    pub weight_unit: Option<String>,

    pub height: Option<Decimal>,

    #[validate(custom(function = "validate_height_unit"))]
    pub height_unit: Option<String>,

    #[validate(length(max = 100))]
    pub country: Option<String>,

    #[serde(default)]
    pub disability: bool,
}

/// Request payload for editing a user profile. Absent fields keep their
/// current value.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 150))]
    pub username: Option<String>,

    #[validate(length(min = 1, max = 150))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 150))]
    pub last_name: Option<String>,

    #[validate(email)]
    pub email: Option<String>,

    #[validate(length(max = 150))]
    pub nickname: Option<String>,

    pub date_of_birth: Option<NaiveDate>,

    #[validate(custom(function = "validate_gender"))]
    pub gender: Option<String>,

    pub weight: Option<Decimal>,

    #[validate(custom(function = "validate_weight_unit"))]
    pub weight_unit: Option<String>,

    pub height: Option<Decimal>,

    #[validate(custom(function = "validate_height_unit"))]
    pub height_unit: Option<String>,

    #[validate(length(max = 100))]
    pub country: Option<String>,

    pub disability: Option<bool>,
}

/// Response containing a user's identity and profile fields
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub user_id: Uuid,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub nickname: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub weight: Option<Decimal>,
    pub weight_unit: Option<String>,
    pub height: Option<Decimal>,
    pub height_unit: Option<String>,
    pub country: Option<String>,
    pub disability: bool,
    pub created_at: NaiveDateTime,
}

// Validation helpers
fn validate_gender(gender: &str) -> Result<(), validator::ValidationError> {
    const VALID_GENDERS: &[&str] = &["M", "F", "X"];

    if VALID_GENDERS.contains(&gender) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_gender"))
    }
}

fn validate_weight_unit(unit: &str) -> Result<(), validator::ValidationError> {
    const VALID_UNITS: &[&str] = &["kg", "lb"];

    if VALID_UNITS.contains(&unit) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_weight_unit"))
    }
}

fn validate_height_unit(unit: &str) -> Result<(), validator::ValidationError> {
    const VALID_UNITS: &[&str] = &["cm", "in"];

    if VALID_UNITS.contains(&unit) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_height_unit"))
    }
}

impl From<crate::models::User> for UserResponse {
    fn from(user: crate::models::User) -> Self {
        Self {
            user_id: user.user_id,
            username: user.username,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            nickname: user.nickname,
            date_of_birth: user.date_of_birth,
            gender: user.gender,
            weight: user.weight,
            weight_unit: user.weight_unit,
            height: user.height,
            height_unit: user.height_unit,
            country: user.country,
            disability: user.disability,
            created_at: user.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateUserRequest {
        CreateUserRequest {
            username: "ada".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            nickname: None,
            date_of_birth: None,
            gender: Some("F".to_string()),
            weight: None,
            weight_unit: None,
            height: None,
            height_unit: None,
            country: Some("GB".to_string()),
            disability: false,
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_bad_email_rejected() {
        let mut req = valid_request();
        req.email = "not-an-address".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_unknown_gender_rejected() {
        let mut req = valid_request();
        req.gender = Some("Q".to_string());
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_unknown_unit_rejected() {
        let mut req = valid_request();
        req.weight_unit = Some("stone".to_string());
        assert!(req.validate().is_err());
    }
}
