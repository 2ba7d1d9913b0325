use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::matches::{
        AssignPlayerRequest, CreateMatchRequest, MatchDetailResponse, MatchListResponse,
        MatchResponse, PlayerSlotResponse,
    },
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/matches",
    responses(
        (status = 200, description = "List all matches with per-team occupancy counts", body = Vec<MatchListResponse>)
    ),
    tag = "matches"
)]
pub async fn list_matches(State(db): State<Database>) -> Result<Response, WebError> {
    let matches = services::list_matches(db.pool()).await?;

    Ok(Json(matches).into_response())
}

#[utoipa::path(
    get,
    path = "/api/matches/{id}",
    params(
        ("id" = Uuid, Path, description = "Match ID")
    ),
    responses(
        (status = 200, description = "Match with slots and occupancy counts", body = MatchResponse),
        (status = 404, description = "Match not found")
    ),
    tag = "matches"
)]
pub async fn get_match(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let m = services::get_match(db.pool(), id).await?;

    Ok(Json(m).into_response())
}

#[utoipa::path(
    get,
    path = "/api/matches/{id}/detailed",
    params(
        ("id" = Uuid, Path, description = "Match ID")
    ),
    responses(
        (status = 200, description = "Match with full nested slot objects", body = MatchDetailResponse),
        (status = 404, description = "Match not found")
    ),
    tag = "matches"
)]
pub async fn get_match_detailed(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let m = services::get_match_detailed(db.pool(), id).await?;

    Ok(Json(m).into_response())
}

#[utoipa::path(
    post,
    path = "/api/matches",
    request_body = CreateMatchRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Match created with two teams of empty slots", body = MatchResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "matches"
)]
pub async fn create_match(
    State(db): State<Database>,
    Json(req): Json<CreateMatchRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let m = services::create_match(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(m)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/matches/{id}/slots/{slot_id}",
    params(
        ("id" = Uuid, Path, description = "Match ID"),
        ("slot_id" = Uuid, Path, description = "Slot ID")
    ),
    request_body = AssignPlayerRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Slot updated", body = PlayerSlotResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Match or slot not found"),
        (status = 409, description = "Player does not exist")
    ),
    tag = "matches"
)]
pub async fn assign_player(
    State(db): State<Database>,
    Path((id, slot_id)): Path<(Uuid, Uuid)>,
    Json(req): Json<AssignPlayerRequest>,
) -> Result<Response, WebError> {
    let slot = services::assign_player(db.pool(), id, slot_id, req.player_id).await?;

    Ok(Json(slot).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/matches/{id}",
    params(
        ("id" = Uuid, Path, description = "Match ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Match deleted, slots cascade away"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Match not found")
    ),
    tag = "matches"
)]
pub async fn delete_match(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_match(db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
