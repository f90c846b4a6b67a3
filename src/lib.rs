// src/lib.rs

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod common;
pub mod config;
pub mod db;
pub mod docs;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

use crate::{config::AppState, docs::ApiDoc, middleware::auth::auth_guard};

/// Monta o router completo da API a partir do estado já construído.
pub fn build_router(app_state: AppState) -> Router {
    // Rotas públicas: health e autenticação
    let public_routes = Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login));

    // Todo o resto passa pelo auth_guard
    let protected_routes = Router::new()
        .route("/auth/logout", post(handlers::auth::logout))
        .route(
            "/users/me",
            get(handlers::auth::get_me).patch(handlers::auth::update_me),
        )
        .route(
            "/contacts",
            get(handlers::contacts::list_contacts).post(handlers::contacts::create_contact),
        )
        .route(
            "/contacts/{id}",
            get(handlers::contacts::get_contact)
                .patch(handlers::contacts::update_contact)
                .delete(handlers::contacts::delete_contact),
        )
        .route(
            "/deals",
            get(handlers::deals::list_deals).post(handlers::deals::create_deal),
        )
        .route(
            "/deals/{id}",
            get(handlers::deals::get_deal)
                .patch(handlers::deals::update_deal)
                .delete(handlers::deals::delete_deal),
        )
        .route(
            "/tasks",
            get(handlers::tasks::list_tasks).post(handlers::tasks::create_task),
        )
        .route(
            "/tasks/{id}",
            get(handlers::tasks::get_task)
                .patch(handlers::tasks::update_task)
                .delete(handlers::tasks::delete_task),
        )
        .route(
            "/taxation",
            get(handlers::taxation::list_tax_records).post(handlers::taxation::create_tax_record),
        )
        .route("/taxation/charts", get(handlers::taxation::get_tax_charts))
        .route("/taxation/preview", post(handlers::taxation::preview_tax))
        .route(
            "/taxation/{id}",
            get(handlers::taxation::get_tax_record)
                .patch(handlers::taxation::update_tax_record)
                .delete(handlers::taxation::delete_tax_record),
        )
        .route(
            "/team",
            get(handlers::team::list_team_members).post(handlers::team::create_team_member),
        )
        .route(
            "/team/{id}",
            get(handlers::team::get_team_member)
                .patch(handlers::team::update_team_member)
                .delete(handlers::team::delete_team_member),
        )
        .route(
            "/activities",
            get(handlers::activities::list_activities).post(handlers::activities::create_activity),
        )
        .route(
            "/preferences",
            get(handlers::preferences::get_preferences).put(handlers::preferences::update_preferences),
        )
        .route("/dashboard/stats", get(handlers::dashboard::get_stats))
        .route("/dashboard/charts", get(handlers::dashboard::get_charts))
        .route("/reports", get(handlers::dashboard::get_report))
        .route("/calendar", get(handlers::dashboard::get_calendar))
        .route("/sentiment", post(handlers::dashboard::analyze_sentiment))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    // Combina tudo no router principal
    Router::new()
        .nest("/api", public_routes.merge(protected_routes))
        .with_state(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
