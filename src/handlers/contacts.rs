// src/handlers/contacts.rs

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
    models::contact::{Contact, ContactQuery, CreateContactPayload, UpdateContactPayload},
};

// GET /api/contacts
#[utoipa::path(
    get,
    path = "/api/contacts",
    tag = "Contacts",
    params(ContactQuery),
    responses(
        (status = 200, description = "Contatos, mais novos primeiro", body = Vec<Contact>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_contacts(
    State(app_state): State<AppState>,
    Query(query): Query<ContactQuery>,
) -> Result<impl IntoResponse, AppError> {
    let contacts = app_state.contact_service.list(&query).await?;
    Ok((StatusCode::OK, Json(contacts)))
}

// POST /api/contacts
#[utoipa::path(
    post,
    path = "/api/contacts",
    tag = "Contacts",
    request_body = CreateContactPayload,
    responses(
        (status = 201, description = "Contato criado", body = Contact),
        (status = 400, description = "Dados inválidos")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_contact(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateContactPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let contact = app_state.contact_service.create(&payload).await?;
    Ok((StatusCode::CREATED, Json(contact)))
}

// GET /api/contacts/{id}
#[utoipa::path(
    get,
    path = "/api/contacts/{id}",
    tag = "Contacts",
    params(("id" = Uuid, Path, description = "ID do contato")),
    responses(
        (status = 200, description = "Contato", body = Contact),
        (status = 404, description = "Não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_contact(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let contact = app_state.contact_service.get(id).await?;
    Ok((StatusCode::OK, Json(contact)))
}

// PATCH /api/contacts/{id}
#[utoipa::path(
    patch,
    path = "/api/contacts/{id}",
    tag = "Contacts",
    params(("id" = Uuid, Path, description = "ID do contato")),
    request_body = UpdateContactPayload,
    responses(
        (status = 200, description = "Contato atualizado", body = Contact),
        (status = 404, description = "Não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_contact(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateContactPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let contact = app_state.contact_service.update(id, &payload).await?;
    Ok((StatusCode::OK, Json(contact)))
}

// DELETE /api/contacts/{id}
#[utoipa::path(
    delete,
    path = "/api/contacts/{id}",
    tag = "Contacts",
    params(("id" = Uuid, Path, description = "ID do contato")),
    responses(
        (status = 204, description = "Contato removido"),
        (status = 404, description = "Não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_contact(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.contact_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
