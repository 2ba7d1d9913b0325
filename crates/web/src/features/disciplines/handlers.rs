use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::discipline::{
        CreateDisciplineRequest, DisciplineFilter, DisciplineResponse, UpdateDisciplineRequest,
    },
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/disciplines",
    params(DisciplineFilter),
    responses(
        (status = 200, description = "List skill profiles, optionally filtered by user", body = Vec<DisciplineResponse>)
    ),
    tag = "disciplines"
)]
pub async fn list_disciplines(
    State(db): State<Database>,
    Query(filter): Query<DisciplineFilter>,
) -> Result<Response, WebError> {
    let disciplines = services::list_disciplines(db.pool(), filter.user_id).await?;

    let response: Vec<DisciplineResponse> = disciplines
        .into_iter()
        .map(DisciplineResponse::from)
        .collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/disciplines/{id}",
    params(
        ("id" = Uuid, Path, description = "Discipline ID")
    ),
    responses(
        (status = 200, description = "Skill profile found", body = DisciplineResponse),
        (status = 404, description = "Skill profile not found")
    ),
    tag = "disciplines"
)]
pub async fn get_discipline(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let discipline = services::get_discipline(db.pool(), id).await?;

    Ok(Json(DisciplineResponse::from(discipline)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/disciplines",
    request_body = CreateDisciplineRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Skill profile created successfully", body = DisciplineResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "User does not exist")
    ),
    tag = "disciplines"
)]
pub async fn create_discipline(
    State(db): State<Database>,
    Json(req): Json<CreateDisciplineRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let discipline = services::create_discipline(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(DisciplineResponse::from(discipline))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/disciplines/{id}",
    params(
        ("id" = Uuid, Path, description = "Discipline ID")
    ),
    request_body = UpdateDisciplineRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Skill profile updated successfully", body = DisciplineResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Skill profile not found")
    ),
    tag = "disciplines"
)]
pub async fn update_discipline(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateDisciplineRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let discipline = services::update_discipline(db.pool(), id, &req).await?;

    Ok(Json(DisciplineResponse::from(discipline)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/disciplines/{id}",
    params(
        ("id" = Uuid, Path, description = "Discipline ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Skill profile deleted successfully"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Skill profile not found")
    ),
    tag = "disciplines"
)]
pub async fn delete_discipline(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_discipline(db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
