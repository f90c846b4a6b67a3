// src/models/task.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::db::{OrderBy, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[schema(value_type = String, format = Date, example = "2025-06-30")]
    pub due_date: NaiveDate,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub completed: bool,
    // Usuário que criou a tarefa; não é chave estrangeira
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record for Task {
    const COLLECTION: &'static str = "tasks";

    fn default_order() -> Option<OrderBy> {
        Some(OrderBy::desc("createdAt"))
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskPayload {
    #[validate(length(min = 1, message = "Informe o título da tarefa."))]
    #[schema(example = "Ligar para o cliente")]
    pub title: String,

    pub description: Option<String>,

    /// Padrão: hoje
    #[schema(value_type = Option<String>, format = Date)]
    pub due_date: Option<NaiveDate>,

    pub priority: Option<Priority>,
}

// O que de fato vai pro store, com os padrões já aplicados
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub due_date: NaiveDate,
    pub priority: Priority,
    pub status: TaskStatus,
    pub completed: bool,
    pub user_id: Uuid,
}

#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "Informe o título da tarefa."))]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, format = Date)]
    pub due_date: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct TaskQuery {
    /// `true` lista só as tarefas do usuário logado
    #[serde(default)]
    pub mine: bool,
}
