use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::discipline::{CreateDisciplineRequest, UpdateDisciplineRequest};
use crate::error::{Result, StorageError};
use crate::models::Discipline;

pub struct DisciplineRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> DisciplineRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List skill profiles, optionally restricted to one user
    pub async fn list(&self, user_id: Option<Uuid>) -> Result<Vec<Discipline>> {
        let disciplines = match user_id {
            Some(user_id) => {
                sqlx::query_as::<_, Discipline>(
                    r#"
                    SELECT discipline_id, user_id, name, favorite_position, dominant_foot,
                           pace, defending, shooting, passing, dribbling,
                           arm, chest, back, leg, strength, resistance,
                           max_distance, pace_avg, level,
                           forehand, backhand, tennis_level, created_at
                    FROM disciplines
                    WHERE user_id = $1
                    ORDER BY created_at DESC
                    "#,
                )
                .bind(user_id)
                .fetch_all(self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Discipline>(
                    r#"
                    SELECT discipline_id, user_id, name, favorite_position, dominant_foot,
                           pace, defending, shooting, passing, dribbling,
                           arm, chest, back, leg, strength, resistance,
                           max_distance, pace_avg, level,
                           forehand, backhand, tennis_level, created_at
                    FROM disciplines
                    ORDER BY created_at DESC
                    "#,
                )
                .fetch_all(self.pool)
                .await?
            }
        };

        Ok(disciplines)
    }

    /// Find a skill profile by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Discipline> {
        let discipline = sqlx::query_as::<_, Discipline>(
            r#"
            SELECT discipline_id, user_id, name, favorite_position, dominant_foot,
                   pace, defending, shooting, passing, dribbling,
                   arm, chest, back, leg, strength, resistance,
                   max_distance, pace_avg, level,
                   forehand, backhand, tennis_level, created_at
            FROM disciplines
            WHERE discipline_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(discipline)
    }

    /// Attach a new skill profile to a user
    pub async fn create(&self, req: &CreateDisciplineRequest) -> Result<Discipline> {
        let discipline = sqlx::query_as::<_, Discipline>(
            r#"
            INSERT INTO disciplines (
                user_id, name, favorite_position, dominant_foot,
                pace, defending, shooting, passing, dribbling,
                arm, chest, back, leg, strength, resistance,
                max_distance, pace_avg, level, forehand, backhand, tennis_level
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11,
                    $12, $13, $14, $15, $16, $17, $18, $19, $20, $21)
            RETURNING discipline_id, user_id, name, favorite_position, dominant_foot,
                      pace, defending, shooting, passing, dribbling,
                      arm, chest, back, leg, strength, resistance,
                      max_distance, pace_avg, level,
                      forehand, backhand, tennis_level, created_at
            "#,
        )
        .bind(req.user_id)
        .bind(&req.name)
        .bind(&req.favorite_position)
        .bind(&req.dominant_foot)
        .bind(req.pace)
        .bind(req.defending)
        .bind(req.shooting)
        .bind(req.passing)
        .bind(req.dribbling)
        .bind(req.arm)
        .bind(req.chest)
        .bind(req.back)
        .bind(req.leg)
        .bind(req.strength)
        .bind(req.resistance)
        .bind(req.max_distance)
        .bind(req.pace_avg)
        .bind(req.level)
        .bind(req.forehand)
        .bind(req.backhand)
        .bind(req.tennis_level)
        .fetch_one(self.pool)
        .await
        .map_err(|e| StorageError::on_foreign_key_violation(e, "User does not exist"))?;

        Ok(discipline)
    }

    /// Update a skill profile. Fields present in the request win, absent
    /// fields keep their stored value.
    pub async fn update(
        &self,
        id: Uuid,
        existing: &Discipline,
        req: &UpdateDisciplineRequest,
    ) -> Result<Discipline> {
        let name = req.name.as_ref().unwrap_or(&existing.name);
        let favorite_position = req
            .favorite_position
            .as_ref()
            .or(existing.favorite_position.as_ref());
        let dominant_foot = req
            .dominant_foot
            .as_ref()
            .or(existing.dominant_foot.as_ref());
        let pace = req.pace.or(existing.pace);
        let defending = req.defending.or(existing.defending);
        let shooting = req.shooting.or(existing.shooting);
        let passing = req.passing.or(existing.passing);
        let dribbling = req.dribbling.or(existing.dribbling);
        let arm = req.arm.or(existing.arm);
        let chest = req.chest.or(existing.chest);
        let back = req.back.or(existing.back);
        let leg = req.leg.or(existing.leg);
        let strength = req.strength.or(existing.strength);
        let resistance = req.resistance.or(existing.resistance);
        let max_distance = req.max_distance.or(existing.max_distance);
        let pace_avg = req.pace_avg.or(existing.pace_avg);
        let level = req.level.or(existing.level);
        let forehand = req.forehand.or(existing.forehand);
        let backhand = req.backhand.or(existing.backhand);
        let tennis_level = req.tennis_level.or(existing.tennis_level);

        let discipline = sqlx::query_as::<_, Discipline>(
            r#"
            UPDATE disciplines
            SET name = $2,
                favorite_position = $3,
                dominant_foot = $4,
                pace = $5,
                defending = $6,
                shooting = $7,
                passing = $8,
                dribbling = $9,
                arm = $10,
                chest = $11,
                back = $12,
                leg = $13,
                strength = $14,
                resistance = $15,
                max_distance = $16,
                pace_avg = $17,
                level = $18,
                forehand = $19,
                backhand = $20,
                tennis_level = $21
            WHERE discipline_id = $1
            RETURNING discipline_id, user_id, name, favorite_position, dominant_foot,
                      pace, defending, shooting, passing, dribbling,
                      arm, chest, back, leg, strength, resistance,
                      max_distance, pace_avg, level,
                      forehand, backhand, tennis_level, created_at
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(favorite_position)
        .bind(dominant_foot)
        .bind(pace)
        .bind(defending)
        .bind(shooting)
        .bind(passing)
        .bind(dribbling)
        .bind(arm)
        .bind(chest)
        .bind(back)
        .bind(leg)
        .bind(strength)
        .bind(resistance)
        .bind(max_distance)
        .bind(pace_avg)
        .bind(level)
        .bind(forehand)
        .bind(backhand)
        .bind(tennis_level)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(discipline)
    }

    /// Delete a skill profile by ID
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM disciplines WHERE discipline_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
