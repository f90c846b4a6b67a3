// src/handlers/team.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::team::{CreateTeamMemberPayload, TeamMember, UpdateTeamMemberPayload},
};

// GET /api/team
#[utoipa::path(
    get,
    path = "/api/team",
    tag = "Team",
    responses(
        (status = 200, description = "Equipe, por ordem de entrada", body = Vec<TeamMember>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_team_members(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let members = app_state.team_service.list().await?;
    Ok((StatusCode::OK, Json(members)))
}

// POST /api/team
#[utoipa::path(
    post,
    path = "/api/team",
    tag = "Team",
    request_body = CreateTeamMemberPayload,
    responses(
        (status = 201, description = "Membro adicionado", body = TeamMember),
        (status = 400, description = "Dados inválidos")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_team_member(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateTeamMemberPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let member = app_state.team_service.create(&payload).await?;
    Ok((StatusCode::CREATED, Json(member)))
}

// GET /api/team/{id}
#[utoipa::path(
    get,
    path = "/api/team/{id}",
    tag = "Team",
    params(("id" = Uuid, Path, description = "ID do membro")),
    responses(
        (status = 200, description = "Membro", body = TeamMember),
        (status = 404, description = "Não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_team_member(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let member = app_state.team_service.get(id).await?;
    Ok((StatusCode::OK, Json(member)))
}

// PATCH /api/team/{id}
#[utoipa::path(
    patch,
    path = "/api/team/{id}",
    tag = "Team",
    params(("id" = Uuid, Path, description = "ID do membro")),
    request_body = UpdateTeamMemberPayload,
    responses(
        (status = 200, description = "Membro atualizado", body = TeamMember),
        (status = 404, description = "Não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_team_member(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateTeamMemberPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let member = app_state.team_service.update(id, &payload).await?;
    Ok((StatusCode::OK, Json(member)))
}

// DELETE /api/team/{id}
#[utoipa::path(
    delete,
    path = "/api/team/{id}",
    tag = "Team",
    params(("id" = Uuid, Path, description = "ID do membro")),
    responses(
        (status = 204, description = "Membro removido"),
        (status = 404, description = "Não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_team_member(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.team_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
