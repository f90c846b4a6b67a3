// src/handlers/dashboard.rs

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::{
        calendar::{CalendarEvent, CalendarQuery},
        dashboard::{DashboardCharts, DashboardStats, DealReport},
        sentiment::{SentimentAnalysis, SentimentPayload},
    },
};

// GET /api/dashboard/stats
#[utoipa::path(
    get,
    path = "/api/dashboard/stats",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Totais de contatos e negócios", body = DashboardStats)
    ),
    security(("api_jwt" = []))
)]
pub async fn get_stats(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let stats = app_state.dashboard_service.get_stats().await?;
    Ok((StatusCode::OK, Json(stats)))
}

// GET /api/dashboard/charts
#[utoipa::path(
    get,
    path = "/api/dashboard/charts",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Funil, receita mensal, ganhos x perdidos e atividades", body = DashboardCharts)
    ),
    security(("api_jwt" = []))
)]
pub async fn get_charts(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let charts = app_state.dashboard_service.get_charts().await?;
    Ok((StatusCode::OK, Json(charts)))
}

// GET /api/reports
#[utoipa::path(
    get,
    path = "/api/reports",
    tag = "Reports",
    responses(
        (status = 200, description = "Relatório de negócios", body = DealReport)
    ),
    security(("api_jwt" = []))
)]
pub async fn get_report(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let report = app_state.dashboard_service.get_deal_report().await?;
    Ok((StatusCode::OK, Json(report)))
}

// GET /api/calendar
#[utoipa::path(
    get,
    path = "/api/calendar",
    tag = "Calendar",
    params(CalendarQuery),
    responses(
        (status = 200, description = "Eventos de tarefas e negócios, por data", body = Vec<CalendarEvent>),
        (status = 400, description = "Filtro de mês inválido")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_calendar(
    State(app_state): State<AppState>,
    Query(query): Query<CalendarQuery>,
) -> Result<impl IntoResponse, AppError> {
    let events = app_state.calendar_service.events(query.month.as_deref()).await?;
    Ok((StatusCode::OK, Json(events)))
}

// POST /api/sentiment
#[utoipa::path(
    post,
    path = "/api/sentiment",
    tag = "Sentiment",
    request_body = SentimentPayload,
    responses(
        (status = 200, description = "Pontuação do texto", body = SentimentAnalysis),
        (status = 400, description = "Texto vazio")
    ),
    security(("api_jwt" = []))
)]
pub async fn analyze_sentiment(
    State(app_state): State<AppState>,
    Json(payload): Json<SentimentPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let analysis = app_state.sentiment_service.analyze(&payload.text)?;
    Ok((StatusCode::OK, Json(analysis)))
}
