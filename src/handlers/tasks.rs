// src/handlers/tasks.rs

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
    middleware::auth::AuthenticatedUser,
    models::task::{CreateTaskPayload, Task, TaskQuery, UpdateTaskPayload},
};

// GET /api/tasks
#[utoipa::path(
    get,
    path = "/api/tasks",
    tag = "Tasks",
    params(TaskQuery),
    responses(
        (status = 200, description = "Tarefas, mais novas primeiro", body = Vec<Task>)
    ),
    security(("api_jwt" = []))
)]
pub async fn list_tasks(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Query(query): Query<TaskQuery>,
) -> Result<impl IntoResponse, AppError> {
    let tasks = app_state.task_service.list(user.id, &query).await?;
    Ok((StatusCode::OK, Json(tasks)))
}

// POST /api/tasks
#[utoipa::path(
    post,
    path = "/api/tasks",
    tag = "Tasks",
    request_body = CreateTaskPayload,
    responses(
        (status = 201, description = "Tarefa criada para o usuário logado", body = Task),
        (status = 400, description = "Dados inválidos")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_task(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Json(payload): Json<CreateTaskPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let task = app_state.task_service.create(user.id, payload).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

// GET /api/tasks/{id}
#[utoipa::path(
    get,
    path = "/api/tasks/{id}",
    tag = "Tasks",
    params(("id" = Uuid, Path, description = "ID da tarefa")),
    responses(
        (status = 200, description = "Tarefa", body = Task),
        (status = 404, description = "Não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_task(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let task = app_state.task_service.get(id).await?;
    Ok((StatusCode::OK, Json(task)))
}

// PATCH /api/tasks/{id}
#[utoipa::path(
    patch,
    path = "/api/tasks/{id}",
    tag = "Tasks",
    params(("id" = Uuid, Path, description = "ID da tarefa")),
    request_body = UpdateTaskPayload,
    responses(
        (status = 200, description = "Tarefa atualizada", body = Task),
        (status = 404, description = "Não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_task(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateTaskPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let task = app_state.task_service.update(id, &payload).await?;
    Ok((StatusCode::OK, Json(task)))
}

// DELETE /api/tasks/{id}
#[utoipa::path(
    delete,
    path = "/api/tasks/{id}",
    tag = "Tasks",
    params(("id" = Uuid, Path, description = "ID da tarefa")),
    responses(
        (status = 204, description = "Tarefa removida"),
        (status = 404, description = "Não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn delete_task(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.task_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
