// src/handlers/deals.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::deal::{CreateDealPayload, Deal, DealQuery, UpdateDealPayload},
};

// GET /api/deals
#[utoipa::path(
    get,
    path = "/api/deals",
    tag = "Deals",
    params(DealQuery),
    responses(
        (status = 200, description = "Negócios, mais novos primeiro", body = Vec<Deal>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_deals(
    State(app_state): State<AppState>,
    Query(query): Query<DealQuery>,
) -> Result<impl IntoResponse, AppError> {
    let deals = app_state.deal_service.list(&query).await?;
    Ok((StatusCode::OK, Json(deals)))
}

// POST /api/deals
#[utoipa::path(
    post,
    path = "/api/deals",
    tag = "Deals",
    request_body = CreateDealPayload,
    responses(
        (status = 201, description = "Negócio criado", body = Deal),
        (status = 400, description = "Dados inválidos")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_deal(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateDealPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let deal = app_state.deal_service.create(&payload).await?;
    Ok((StatusCode::CREATED, Json(deal)))
}

// GET /api/deals/{id}
#[utoipa::path(
    get,
    path = "/api/deals/{id}",
    tag = "Deals",
    params(("id" = Uuid, Path, description = "ID do negócio")),
    responses(
        (status = 200, description = "Negócio", body = Deal),
        (status = 404, description = "Não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_deal(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let deal = app_state.deal_service.get(id).await?;
    Ok((StatusCode::OK, Json(deal)))
}

// PATCH /api/deals/{id}
#[utoipa::path(
    patch,
    path = "/api/deals/{id}",
    tag = "Deals",
    params(("id" = Uuid, Path, description = "ID do negócio")),
    request_body = UpdateDealPayload,
    responses(
        (status = 200, description = "Negócio atualizado", body = Deal),
        (status = 404, description = "Não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_deal(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateDealPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let deal = app_state.deal_service.update(id, &payload).await?;
    Ok((StatusCode::OK, Json(deal)))
}

// DELETE /api/deals/{id}
#[utoipa::path(
    delete,
    path = "/api/deals/{id}",
    tag = "Deals",
    params(("id" = Uuid, Path, description = "ID do negócio")),
    responses(
        (status = 204, description = "Negócio removido"),
        (status = 404, description = "Não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_deal(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.deal_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
