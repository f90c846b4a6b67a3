// src/handlers/preferences.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AuthenticatedUser,
    models::preferences::{UpdatePreferencesPayload, UserPreferences},
};

// GET /api/preferences
#[utoipa::path(
    get,
    path = "/api/preferences",
    tag = "Preferences",
    responses(
        (status = 200, description = "Preferências salvas ou os valores padrão", body = UserPreferences)
    ),
    security(("api_jwt" = []))
)]
pub async fn get_preferences(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<impl IntoResponse, AppError> {
    let preferences = app_state.preferences_service.get(user.id).await?;
    Ok((StatusCode::OK, Json(preferences)))
}

// PUT /api/preferences
#[utoipa::path(
    put,
    path = "/api/preferences",
    tag = "Preferences",
    request_body = UpdatePreferencesPayload,
    responses(
        (status = 200, description = "Preferências gravadas", body = UserPreferences),
        (status = 400, description = "Dados inválidos")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_preferences(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Json(payload): Json<UpdatePreferencesPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let preferences = app_state.preferences_service.save(user.id, &payload).await?;
    Ok((StatusCode::OK, Json(preferences)))
}
