use sqlx::PgPool;
use storage::{
    dto::discipline::{CreateDisciplineRequest, UpdateDisciplineRequest},
    error::Result,
    models::Discipline,
    repository::discipline::DisciplineRepository,
};
use uuid::Uuid;

/// List skill profiles, optionally restricted to one user
pub async fn list_disciplines(pool: &PgPool, user_id: Option<Uuid>) -> Result<Vec<Discipline>> {
    let repo = DisciplineRepository::new(pool);
    repo.list(user_id).await
}

/// Get a skill profile by ID
pub async fn get_discipline(pool: &PgPool, id: Uuid) -> Result<Discipline> {
    let repo = DisciplineRepository::new(pool);
    repo.find_by_id(id).await
}

/// Attach a new skill profile to a user
pub async fn create_discipline(
    pool: &PgPool,
    request: &CreateDisciplineRequest,
) -> Result<Discipline> {
    let repo = DisciplineRepository::new(pool);
    repo.create(request).await
}

/// Update a skill profile
pub async fn update_discipline(
    pool: &PgPool,
    id: Uuid,
    request: &UpdateDisciplineRequest,
) -> Result<Discipline> {
    let repo = DisciplineRepository::new(pool);
    let existing = repo.find_by_id(id).await?;
    repo.update(id, &existing, request).await
}

/// Delete a skill profile
pub async fn delete_discipline(pool: &PgPool, id: Uuid) -> Result<()> {
    let repo = DisciplineRepository::new(pool);
    repo.delete(id).await
}
