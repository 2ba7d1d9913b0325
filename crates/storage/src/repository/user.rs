use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::user::{CreateUserRequest, UpdateUserRequest};
use crate::error::{Result, StorageError};
use crate::models::User;

pub struct UserRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List one page of users, ordered by username
    pub async fn list(&self, limit: u32, offset: u32) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT user_id, username, first_name, last_name, email, nickname,
                   date_of_birth, gender, weight, weight_unit, height, height_unit,
                   country, disability, created_at
            FROM users
            ORDER BY username
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(i64::from(limit))
        .bind(i64::from(offset))
        .fetch_all(self.pool)
        .await?;

        Ok(users)
    }

    /// Total number of registered users
    pub async fn count(&self) -> Result<i64> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(self.pool)
            .await?;

        Ok(total)
    }

    /// Find a user by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT user_id, username, first_name, last_name, email, nickname,
                   date_of_birth, gender, weight, weight_unit, height, height_unit,
                   country, disability, created_at
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(user)
    }

    /// Register a new user
    pub async fn create(&self, req: &CreateUserRequest) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (
                username, first_name, last_name, email, nickname, date_of_birth,
                gender, weight, weight_unit, height, height_unit, country, disability
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING user_id, username, first_name, last_name, email, nickname,
                      date_of_birth, gender, weight, weight_unit, height, height_unit,
                      country, disability, created_at
            "#,
        )
        .bind(&req.username)
        .bind(&req.first_name)
        .bind(&req.last_name)
        .bind(&req.email)
        .bind(&req.nickname)
        .bind(req.date_of_birth)
        .bind(&req.gender)
        .bind(req.weight)
        .bind(&req.weight_unit)
        .bind(req.height)
        .bind(&req.height_unit)
        .bind(&req.country)
        .bind(req.disability)
        .fetch_one(self.pool)
        .await
        .map_err(|e| StorageError::on_unique_violation(e, "Username or email already taken"))?;

        Ok(user)
    }

    /// Update a user profile. Fields present in the request win, absent
    /// fields keep their stored value.
    pub async fn update(&self, id: Uuid, existing: &User, req: &UpdateUserRequest) -> Result<User> {
        let username = req.username.as_ref().unwrap_or(&existing.username);
        let first_name = req.first_name.as_ref().unwrap_or(&existing.first_name);
        let last_name = req.last_name.as_ref().unwrap_or(&existing.last_name);
        let email = req.email.as_ref().unwrap_or(&existing.email);
        let nickname = req.nickname.as_ref().or(existing.nickname.as_ref());
        let date_of_birth = req.date_of_birth.or(existing.date_of_birth);
        let gender = req.gender.as_ref().or(existing.gender.as_ref());
        let weight = req.weight.or(existing.weight);
        let weight_unit = req.weight_unit.as_ref().or(existing.weight_unit.as_ref());
        let height = req.height.or(existing.height);
        let height_unit = req.height_unit.as_ref().or(existing.height_unit.as_ref());
        let country = req.country.as_ref().or(existing.country.as_ref());
        let disability = req.disability.unwrap_or(existing.disability);

        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET username = $2,
                first_name = $3,
                last_name = $4,
                email = $5,
                nickname = $6,
                date_of_birth = $7,
                gender = $8,
                weight = $9,
                weight_unit = $10,
                height = $11,
                height_unit = $12,
                country = $13,
                disability = $14
            WHERE user_id = $1
            RETURNING user_id, username, first_name, last_name, email, nickname,
                      date_of_birth, gender, weight, weight_unit, height, height_unit,
                      country, disability, created_at
            "#,
        )
        .bind(id)
        .bind(username)
        .bind(first_name)
        .bind(last_name)
        .bind(email)
        .bind(nickname)
        .bind(date_of_birth)
        .bind(gender)
        .bind(weight)
        .bind(weight_unit)
        .bind(height)
        .bind(height_unit)
        .bind(country)
        .bind(disability)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| StorageError::on_unique_violation(e, "Username or email already taken"))?
        .ok_or(StorageError::NotFound)?;

        Ok(user)
    }

    /// Delete a user account by ID
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM users WHERE user_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
