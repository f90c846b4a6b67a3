// src/handlers/taxation.rs

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
    models::{
        dashboard::TaxCharts,
        tax::{CreateTaxRecordPayload, TaxPreview, TaxPreviewPayload, TaxRecord, UpdateTaxRecordPayload},
    },
};

// GET /api/taxation
#[utoipa::path(
    get,
    path = "/api/taxation",
    tag = "Taxation",
    responses(
        (status = 200, description = "Registros de impostos, mais novos primeiro", body = Vec<TaxRecord>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_tax_records(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let records = app_state.tax_service.list().await?;
    Ok((StatusCode::OK, Json(records)))
}

// POST /api/taxation
#[utoipa::path(
    post,
    path = "/api/taxation",
    tag = "Taxation",
    request_body = CreateTaxRecordPayload,
    responses(
        (status = 201, description = "Registro criado com o imposto calculado", body = TaxRecord),
        (status = 400, description = "Dados inválidos")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_tax_record(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateTaxRecordPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let record = app_state.tax_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

// GET /api/taxation/{id}
#[utoipa::path(
    get,
    path = "/api/taxation/{id}",
    tag = "Taxation",
    params(("id" = Uuid, Path, description = "ID do registro")),
    responses(
        (status = 200, description = "Registro de imposto", body = TaxRecord),
        (status = 404, description = "Não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_tax_record(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let record = app_state.tax_service.get(id).await?;
    Ok((StatusCode::OK, Json(record)))
}

// PATCH /api/taxation/{id}
#[utoipa::path(
    patch,
    path = "/api/taxation/{id}",
    tag = "Taxation",
    params(("id" = Uuid, Path, description = "ID do registro")),
    request_body = UpdateTaxRecordPayload,
    responses(
        (status = 200, description = "Registro atualizado (imposto recalculado se preciso)", body = TaxRecord),
        (status = 404, description = "Não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_tax_record(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateTaxRecordPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let record = app_state.tax_service.update(id, payload).await?;
    Ok((StatusCode::OK, Json(record)))
}

// DELETE /api/taxation/{id}
#[utoipa::path(
    delete,
    path = "/api/taxation/{id}",
    tag = "Taxation",
    params(("id" = Uuid, Path, description = "ID do registro")),
    responses(
        (status = 204, description = "Registro removido"),
        (status = 404, description = "Não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_tax_record(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.tax_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// GET /api/taxation/charts
#[utoipa::path(
    get,
    path = "/api/taxation/charts",
    tag = "Taxation",
    responses(
        (status = 200, description = "Valores por tipo, status e mês de vencimento", body = TaxCharts)
    ),
    security(("api_jwt" = []))
)]
pub async fn get_tax_charts(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let charts = app_state.tax_service.charts().await?;
    Ok((StatusCode::OK, Json(charts)))
}

// POST /api/taxation/preview
#[utoipa::path(
    post,
    path = "/api/taxation/preview",
    tag = "Taxation",
    request_body = TaxPreviewPayload,
    responses(
        (status = 200, description = "Imposto calculado, sem gravar nada", body = TaxPreview)
    ),
    security(("api_jwt" = []))
)]
pub async fn preview_tax(
    State(app_state): State<AppState>,
    Json(payload): Json<TaxPreviewPayload>,
) -> Json<TaxPreview> {
    Json(app_state.tax_service.preview(&payload))
}
