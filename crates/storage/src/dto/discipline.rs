use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Request payload for attaching a skill profile to a user
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateDisciplineRequest {
    pub user_id: Uuid,

    #[validate(length(
        min = 1,
        max = 100,
        message = "Name must be between 1 and 100 characters"
    ))]
    pub name: String,

    #[validate(length(max = 64))]
    pub favorite_position: Option<String>,

    #[validate(custom(function = "validate_dominant_foot"))]
    pub dominant_foot: Option<String>,

    #[validate(range(min = 0, max = 100))]
    pub pace: Option<i16>,

    #[validate(range(min = 0, max = 100))]
    pub defending: Option<i16>,

    #[validate(range(min = 0, max = 100))]
    pub shooting: Option<i16>,

    #[validate(range(min = 0, max = 100))]
    pub passing: Option<i16>,

    #[validate(range(min = 0, max = 100))]
    pub dribbling: Option<i16>,

    #[validate(range(min = 0, max = 100))]
    pub arm: Option<i16>,

    #[validate(range(min = 0, max = 100))]
    pub chest: Option<i16>,

    #[validate(range(min = 0, max = 100))]
    pub back: Option<i16>,

    #[validate(range(min = 0, max = 100))]
    pub leg: Option<i16>,

    #[validate(range(min = 0, max = 100))]
    pub strength: Option<i16>,

    #[validate(range(min = 0, max = 100))]
    pub resistance: Option<i16>,

    pub max_distance: Option<Decimal>,

    pub pace_avg: Option<Decimal>,

    #[validate(range(min = 1, max = 10))]
    pub level: Option<i16>,

    #[validate(range(min = 0, max = 100))]
    pub forehand: Option<i16>,

    #[validate(range(min = 0, max = 100))]
    pub backhand: Option<i16>,

    #[validate(range(min = 1, max = 10))]
    pub tennis_level: Option<i16>,
}

/// Request payload for updating a skill profile. Absent fields keep their
/// current value; the owning user cannot change.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateDisciplineRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,

    #[validate(length(max = 64))]
    pub favorite_position: Option<String>,

    #[validate(custom(function = "validate_dominant_foot"))]
    pub dominant_foot: Option<String>,

    #[validate(range(min = 0, max = 100))]
    pub pace: Option<i16>,

    #[validate(range(min = 0, max = 100))]
    pub defending: Option<i16>,

    #[validate(range(min = 0, max = 100))]
    pub shooting: Option<i16>,

    #[validate(range(min = 0, max = 100))]
    pub passing: Option<i16>,

    #[validate(range(min = 0, max = 100))]
    pub dribbling: Option<i16>,

    #[validate(range(min = 0, max = 100))]
    pub arm: Option<i16>,

    #[validate(range(min = 0, max = 100))]
    pub chest: Option<i16>,

    #[validate(range(min = 0, max = 100))]
    pub back: Option<i16>,

    #[validate(range(min = 0, max = 100))]
    pub leg: Option<i16>,

    #[validate(range(min = 0, max = 100))]
    pub strength: Option<i16>,

    #[validate(range(min = 0, max = 100))]
    pub resistance: Option<i16>,

    pub max_distance: Option<Decimal>,

    pub pace_avg: Option<Decimal>,

    #[validate(range(min = 1, max = 10))]
    pub level: Option<i16>,

    #[validate(range(min = 0, max = 100))]
    pub forehand: Option<i16>,

    #[validate(range(min = 0, max = 100))]
    pub backhand: Option<i16>,

    #[validate(range(min = 1, max = 10))]
    pub tennis_level: Option<i16>,
}

/// Query filter for listing disciplines
#[derive(Debug, Deserialize, IntoParams)]
pub struct DisciplineFilter {
    pub user_id: Option<Uuid>,
}

/// Response containing a skill profile
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DisciplineResponse {
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
    pub created_at: NaiveDateTime,
}

// Validation helper
fn validate_dominant_foot(foot: &str) -> Result<(), validator::ValidationError> {
    const VALID_FEET: &[&str] = &["left", "right", "both"];

    if VALID_FEET.contains(&foot) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_dominant_foot"))
    }
}

impl From<crate::models::Discipline> for DisciplineResponse {
    fn from(discipline: crate::models::Discipline) -> Self {
        Self {
            discipline_id: discipline.discipline_id,
            user_id: discipline.user_id,
            name: discipline.name,
            favorite_position: discipline.favorite_position,
            dominant_foot: discipline.dominant_foot,
            pace: discipline.pace,
            defending: discipline.defending,
            shooting: discipline.shooting,
            passing: discipline.passing,
            dribbling: discipline.dribbling,
            arm: discipline.arm,
            chest: discipline.chest,
            back: discipline.back,
            leg: discipline.leg,
            strength: discipline.strength,
            resistance: discipline.resistance,
            max_distance: discipline.max_distance,
            pace_avg: discipline.pace_avg,
            level: discipline.level,
            forehand: discipline.forehand,
            backhand: discipline.backhand,
            tennis_level: discipline.tennis_level,
            created_at: discipline.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn football_profile() -> CreateDisciplineRequest {
        CreateDisciplineRequest {
            user_id: Uuid::new_v4(),
            name: "football".to_string(),
            favorite_position: Some("midfielder".to_string()),
            dominant_foot: Some("left".to_string()),
            pace: Some(72),
            defending: Some(55),
            shooting: Some(61),
            passing: Some(80),
            dribbling: Some(68),
            arm: None,
            chest: None,
            back: None,
            leg: None,
            strength: None,
            resistance: None,
            max_distance: None,
            pace_avg: None,
            level: None,
            forehand: None,
            backhand: None,
            tennis_level: None,
        }
    }

    #[test]
    fn test_partial_profile_is_valid() {
        assert!(football_profile().validate().is_ok());
    }

    #[test]
    fn test_rating_over_100_rejected() {
        let mut req = football_profile();
        req.shooting = Some(101);
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_unknown_dominant_foot_rejected() {
        let mut req = football_profile();
        req.dominant_foot = Some("ambidextrous".to_string());
        assert!(req.validate().is_err());
    }
}
