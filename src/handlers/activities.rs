// src/handlers/activities.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::activity::{Activity, CreateActivityPayload},
};

// GET /api/activities
#[utoipa::path(
    get,
    path = "/api/activities",
    tag = "Activities",
    responses(
        (status = 200, description = "Atividades, mais recentes primeiro", body = Vec<Activity>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_activities(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let activities = app_state.activity_service.list().await?;
    Ok((StatusCode::OK, Json(activities)))
}

// POST /api/activities
#[utoipa::path(
    post,
    path = "/api/activities",
    tag = "Activities",
    request_body = CreateActivityPayload,
    responses(
        (status = 201, description = "Atividade registrada", body = Activity),
        (status = 400, description = "Dados inválidos")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_activity(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateActivityPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let activity = app_state.activity_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(activity)))
}
