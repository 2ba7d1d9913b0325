use sqlx::PgPool;
use storage::{
    dto::user::{CreateUserRequest, UpdateUserRequest},
    error::Result,
    models::User,
    repository::user::UserRepository,
};
use uuid::Uuid;

/// List one page of users plus the overall total
pub async fn list_users(pool: &PgPool, limit: u32, offset: u32) -> Result<(Vec<User>, i64)> {
    let repo = UserRepository::new(pool);
    let users = repo.list(limit, offset).await?;
    let total = repo.count().await?;
    Ok((users, total))
}

/// Get a user by ID
pub async fn get_user(pool: &PgPool, id: Uuid) -> Result<User> {
    let repo = UserRepository::new(pool);
    repo.find_by_id(id).await
}

/// Register a new user
pub async fn create_user(pool: &PgPool, request: &CreateUserRequest) -> Result<User> {
    let repo = UserRepository::new(pool);
    repo.create(request).await
}

/// Update a user profile
pub async fn update_user(pool: &PgPool, id: Uuid, request: &UpdateUserRequest) -> Result<User> {
    let repo = UserRepository::new(pool);
    let existing = repo.find_by_id(id).await?;
    repo.update(id, &existing, request).await
}

/// Delete a user account
pub async fn delete_user(pool: &PgPool, id: Uuid) -> Result<()> {
    let repo = UserRepository::new(pool);
    repo.delete(id).await
}
