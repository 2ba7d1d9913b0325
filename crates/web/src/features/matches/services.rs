use sqlx::PgPool;
use storage::{
    dto::matches::{
        CreateMatchRequest, MatchDetailResponse, MatchListResponse, MatchResponse,
        PlayerSlotResponse,
    },
    error::Result,
    repository::matches::MatchRepository,
};
use uuid::Uuid;

/// List all matches with their occupancy counts
pub async fn list_matches(pool: &PgPool) -> Result<Vec<MatchListResponse>> {
    let repo = MatchRepository::new(pool);
    repo.list().await
}

/// Get the summary representation of a match: slots plus per-team counts
pub async fn get_match(pool: &PgPool, id: Uuid) -> Result<MatchResponse> {
    let repo = MatchRepository::new(pool);
    let m = repo.find_by_id(id).await?;
    let slots = repo.slots_for_match(id).await?;
    Ok(MatchResponse::from_parts(m, slots))
}

/// Get the detail representation of a match: full nested slots
pub async fn get_match_detailed(pool: &PgPool, id: Uuid) -> Result<MatchDetailResponse> {
    let repo = MatchRepository::new(pool);
    let m = repo.find_by_id(id).await?;
    let slots = repo.slots_for_match(id).await?;
    Ok(MatchDetailResponse::from_parts(m, slots))
}

/// Create a match; its empty slots are provisioned in the same transaction
pub async fn create_match(pool: &PgPool, request: &CreateMatchRequest) -> Result<MatchResponse> {
    let repo = MatchRepository::new(pool);
    let created = repo.create(request).await?;
    let slots = repo.slots_for_match(created.match_id).await?;
    Ok(MatchResponse::from_parts(created, slots))
}

/// Assign a player to a slot of a match, or clear it
pub async fn assign_player(
    pool: &PgPool,
    match_id: Uuid,
    slot_id: Uuid,
    player_id: Option<Uuid>,
) -> Result<PlayerSlotResponse> {
    let repo = MatchRepository::new(pool);
    let slot = repo.assign_player(match_id, slot_id, player_id).await?;
    repo.find_slot(slot.match_id, slot.slot_id).await
}

/// Delete a match and its slots
pub async fn delete_match(pool: &PgPool, id: Uuid) -> Result<()> {
    let repo = MatchRepository::new(pool);
    repo.delete(id).await
}
