use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::matches::{CreateMatchRequest, MatchListResponse, PlayerSlotResponse};
use crate::error::{Result, StorageError};
use crate::models::{Match, PlayerSlot};

pub struct MatchRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> MatchRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all matches with per-team occupancy counts, newest kickoff first
    pub async fn list(&self) -> Result<Vec<MatchListResponse>> {
        let matches = sqlx::query_as::<_, MatchListResponse>(
            r#"
            SELECT m.match_id, m.place, m.location_coordinates, m.date_time,
                   m.player_count, m.formation, m.field_type,
                   COUNT(ps.slot_id) FILTER (WHERE ps.team = 1 AND ps.player_id IS NOT NULL) AS team_1_players,
                   COUNT(ps.slot_id) FILTER (WHERE ps.team = 2 AND ps.player_id IS NOT NULL) AS team_2_players
            FROM matches m
            LEFT JOIN player_slots ps ON ps.match_id = m.match_id
            GROUP BY m.match_id
            ORDER BY m.date_time DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(matches)
    }

    /// Find a match by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Match> {
        let m = sqlx::query_as::<_, Match>(
            r#"
            SELECT match_id, place, location_coordinates, date_time,
                   player_count, formation, field_type, created_at
            FROM matches
            WHERE match_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(m)
    }

    /// All slots of a match with the assigned player's username joined in,
    /// ordered by team then slot number
    pub async fn slots_for_match(&self, match_id: Uuid) -> Result<Vec<PlayerSlotResponse>> {
        let slots = sqlx::query_as::<_, PlayerSlotResponse>(
            r#"
            SELECT ps.slot_id, ps.match_id, ps.team, ps.slot_number, ps.player_id,
                   u.username AS player_username
            FROM player_slots ps
            LEFT JOIN users u ON u.user_id = ps.player_id
            WHERE ps.match_id = $1
            ORDER BY ps.team, ps.slot_number
            "#,
        )
        .bind(match_id)
        .fetch_all(self.pool)
        .await?;

        Ok(slots)
    }

    /// Create a match and provision its empty player slots.
    ///
    /// The match row and all 2 * player_count slot rows are written in one
    /// transaction, so a mid-sequence failure never leaves a match with a
    /// partial slot set.
    pub async fn create(&self, req: &CreateMatchRequest) -> Result<Match> {
        let mut tx = self.pool.begin().await?;

        let m = sqlx::query_as::<_, Match>(
            r#"
            INSERT INTO matches (place, location_coordinates, date_time,
                                 player_count, formation, field_type)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING match_id, place, location_coordinates, date_time,
                      player_count, formation, field_type, created_at
            "#,
        )
        .bind(&req.place)
        .bind(&req.location_coordinates)
        .bind(req.date_time)
        .bind(req.player_count)
        .bind(&req.formation)
        .bind(&req.field_type)
        .fetch_one(&mut *tx)
        .await?;

        for (team, slot_number) in slot_plan(m.player_count) {
            sqlx::query(
                r#"
                INSERT INTO player_slots (match_id, team, slot_number)
                VALUES ($1, $2, $3)
                "#,
            )
            .bind(m.match_id)
            .bind(team)
            .bind(slot_number)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(m)
    }

    /// Assign a player to a slot, or clear it with `player_id = None`.
    /// The slot must belong to the given match.
    pub async fn assign_player(
        &self,
        match_id: Uuid,
        slot_id: Uuid,
        player_id: Option<Uuid>,
    ) -> Result<PlayerSlot> {
        let slot = sqlx::query_as::<_, PlayerSlot>(
            r#"
            UPDATE player_slots
            SET player_id = $3
            WHERE slot_id = $1 AND match_id = $2
            RETURNING slot_id, match_id, team, slot_number, player_id
            "#,
        )
        .bind(slot_id)
        .bind(match_id)
        .bind(player_id)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| StorageError::on_foreign_key_violation(e, "Player does not exist"))?
        .ok_or(StorageError::NotFound)?;

        Ok(slot)
    }

    /// One slot with the assigned player's username joined in
    pub async fn find_slot(&self, match_id: Uuid, slot_id: Uuid) -> Result<PlayerSlotResponse> {
        let slot = sqlx::query_as::<_, PlayerSlotResponse>(
            r#"
            SELECT ps.slot_id, ps.match_id, ps.team, ps.slot_number, ps.player_id,
                   u.username AS player_username
            FROM player_slots ps
            LEFT JOIN users u ON u.user_id = ps.player_id
            WHERE ps.slot_id = $1 AND ps.match_id = $2
            "#,
        )
        .bind(slot_id)
        .bind(match_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(slot)
    }

    /// Delete a match by ID; its slots cascade away with it
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM matches WHERE match_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}

/// The (team, slot_number) pairs a new match gets: numbers 1..=player_count
/// on each of the two teams.
fn slot_plan(player_count: i32) -> Vec<(i16, i32)> {
    (1..=2i16)
        .flat_map(|team| (1..=player_count).map(move |slot_number| (team, slot_number)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_plan_size_is_twice_player_count() {
        assert_eq!(slot_plan(5).len(), 10);
        assert_eq!(slot_plan(1).len(), 2);
        assert_eq!(slot_plan(11).len(), 22);
    }

    #[test]
    fn test_plan_splits_evenly_between_teams() {
        let plan = slot_plan(7);
        assert_eq!(plan.iter().filter(|(team, _)| *team == 1).count(), 7);
        assert_eq!(plan.iter().filter(|(team, _)| *team == 2).count(), 7);
    }

    #[test]
    fn test_slot_numbers_are_contiguous_per_team() {
        let plan = slot_plan(5);
        for team in [1i16, 2] {
            let numbers: HashSet<i32> = plan
                .iter()
                .filter(|(t, _)| *t == team)
                .map(|(_, n)| *n)
                .collect();
            assert_eq!(numbers, (1..=5).collect::<HashSet<i32>>());
        }
    }

    #[test]
    fn test_plan_has_no_duplicates() {
        let plan = slot_plan(9);
        let unique: HashSet<(i16, i32)> = plan.iter().copied().collect();
        assert_eq!(unique.len(), plan.len());
    }
}
