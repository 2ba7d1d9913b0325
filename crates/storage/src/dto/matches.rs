use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::Match;

/// Request payload for scheduling a new match
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateMatchRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Place must be between 1 and 255 characters"
    ))]
    pub place: String,

    #[validate(length(max = 255))]
    pub location_coordinates: Option<String>,

    pub date_time: DateTime<Utc>,

    #[validate(range(min = 1, message = "Player count must be at least 1"))]
    pub player_count: i32,

    #[validate(length(max = 64))]
    pub formation: Option<String>,

    #[validate(length(max = 64))]
    pub field_type: Option<String>,
}

/// Request payload for filling or vacating a player slot. `player_id: null`
/// clears the slot.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AssignPlayerRequest {
    pub player_id: Option<Uuid>,
}

/// One player slot as exposed over the wire. `player_username` is derived
/// from the assigned user and is null while the slot is open.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct PlayerSlotResponse {
    pub slot_id: Uuid,
    pub match_id: Uuid,
    pub team: i16,
    pub slot_number: i32,
    pub player_id: Option<Uuid>,
    pub player_username: Option<String>,
}

/// Summary representation of a match: slots plus per-team occupancy counts
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MatchResponse {
    pub match_id: Uuid,
    pub place: String,
    pub location_coordinates: Option<String>,
    pub date_time: DateTime<Utc>,
    pub player_count: i32,
    pub formation: Option<String>,
    pub field_type: Option<String>,
    pub player_slots: Vec<PlayerSlotResponse>,
    pub team_1_players: i64,
    pub team_2_players: i64,
}

/// Detail representation: full nested slots, no summary counts
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MatchDetailResponse {
    pub match_id: Uuid,
    pub place: String,
    pub location_coordinates: Option<String>,
    pub date_time: DateTime<Utc>,
    pub player_count: i32,
    pub formation: Option<String>,
    pub field_type: Option<String>,
    pub player_slots: Vec<PlayerSlotResponse>,
}

/// One row of the match listing, occupancy counts aggregated in SQL
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct MatchListResponse {
    pub match_id: Uuid,
    pub place: String,
    pub location_coordinates: Option<String>,
    pub date_time: DateTime<Utc>,
    pub player_count: i32,
    pub formation: Option<String>,
    pub field_type: Option<String>,
    pub team_1_players: i64,
    pub team_2_players: i64,
}

impl MatchResponse {
    pub fn from_parts(m: Match, player_slots: Vec<PlayerSlotResponse>) -> Self {
        let team_1_players = count_assigned(&player_slots, 1);
        let team_2_players = count_assigned(&player_slots, 2);

        Self {
            match_id: m.match_id,
            place: m.place,
            location_coordinates: m.location_coordinates,
            date_time: m.date_time,
            player_count: m.player_count,
            formation: m.formation,
            field_type: m.field_type,
            player_slots,
            team_1_players,
            team_2_players,
        }
    }
}

impl MatchDetailResponse {
    pub fn from_parts(m: Match, player_slots: Vec<PlayerSlotResponse>) -> Self {
        Self {
            match_id: m.match_id,
            place: m.place,
            location_coordinates: m.location_coordinates,
            date_time: m.date_time,
            player_count: m.player_count,
            formation: m.formation,
            field_type: m.field_type,
            player_slots,
        }
    }
}

/// Number of slots on the given team with a player assigned. Zero when no
/// slot matches.
fn count_assigned(slots: &[PlayerSlotResponse], team: i16) -> i64 {
    slots
        .iter()
        .filter(|s| s.team == team && s.player_id.is_some())
        .count() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_slot(match_id: Uuid, team: i16, slot_number: i32) -> PlayerSlotResponse {
        PlayerSlotResponse {
            slot_id: Uuid::new_v4(),
            match_id,
            team,
            slot_number,
            player_id: None,
            player_username: None,
        }
    }

    fn sample_match(player_count: i32) -> Match {
        Match {
            match_id: Uuid::new_v4(),
            place: "Riverside pitch".to_string(),
            location_coordinates: Some("51.5072,-0.1276".to_string()),
            date_time: "2025-09-01T18:30:00Z".parse().unwrap(),
            player_count,
            formation: Some("4-4-2".to_string()),
            field_type: Some("grass".to_string()),
            created_at: chrono::NaiveDateTime::default(),
        }
    }

    #[test]
    fn test_fresh_match_has_zero_counts() {
        let m = sample_match(5);
        let slots: Vec<_> = (1i16..=2)
            .flat_map(|team| (1..=5).map(move |n| (team, n)))
            .map(|(team, n)| open_slot(m.match_id, team, n))
            .collect();

        let response = MatchResponse::from_parts(m, slots);
        assert_eq!(response.player_slots.len(), 10);
        assert_eq!(response.team_1_players, 0);
        assert_eq!(response.team_2_players, 0);
    }

    #[test]
    fn test_counts_follow_assignments() {
        let m = sample_match(2);
        let mut slots = vec![
            open_slot(m.match_id, 1, 1),
            open_slot(m.match_id, 1, 2),
            open_slot(m.match_id, 2, 1),
            open_slot(m.match_id, 2, 2),
        ];
        slots[0].player_id = Some(Uuid::new_v4());
        slots[0].player_username = Some("ada".to_string());
        slots[1].player_id = Some(Uuid::new_v4());
        slots[1].player_username = Some("grace".to_string());
        slots[2].player_id = Some(Uuid::new_v4());
        slots[2].player_username = Some("edsger".to_string());

        let response = MatchResponse::from_parts(m, slots);
        assert_eq!(response.team_1_players, 2);
        assert_eq!(response.team_2_players, 1);
    }

    #[test]
    fn test_single_assignment_keeps_other_team_empty() {
        let m = sample_match(1);
        let mut slots = vec![open_slot(m.match_id, 1, 1), open_slot(m.match_id, 2, 1)];
        slots[0].player_id = Some(Uuid::new_v4());
        slots[0].player_username = Some("ada".to_string());

        let response = MatchResponse::from_parts(m, slots);
        assert_eq!(response.team_1_players, 1);
        assert_eq!(response.team_2_players, 0);
        assert_eq!(
            response.player_slots[0].player_username.as_deref(),
            Some("ada")
        );
        assert!(response.player_slots[1].player_username.is_none());
    }

    #[test]
    fn test_open_slot_serializes_null_username() {
        let slot = open_slot(Uuid::new_v4(), 1, 1);
        let json = serde_json::to_value(&slot).unwrap();
        assert!(json["player_username"].is_null());
        assert!(json["player_id"].is_null());
    }

    #[test]
    fn test_zero_player_count_rejected() {
        let req = CreateMatchRequest {
            place: "Riverside pitch".to_string(),
            location_coordinates: None,
            date_time: "2025-09-01T18:30:00Z".parse().unwrap(),
            player_count: 0,
            formation: None,
            field_type: None,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_minimal_request_passes() {
        let req = CreateMatchRequest {
            place: "Riverside pitch".to_string(),
            location_coordinates: None,
            date_time: "2025-09-01T18:30:00Z".parse().unwrap(),
            player_count: 1,
            formation: None,
            field_type: None,
        };
        assert!(req.validate().is_ok());
    }
}
