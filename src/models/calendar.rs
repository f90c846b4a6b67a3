// src/models/calendar.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Task,
    Deal,
}

/// Evento do calendário, derivado de uma tarefa (vencimento) ou de um
/// negócio (fechamento previsto).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    /// Id da tarefa ou do negócio de origem
    pub id: Uuid,
    pub title: String,
    #[schema(value_type = String, format = Date)]
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub event_type: EventType,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct CalendarQuery {
    /// Mês no formato YYYY-MM
    #[param(example = "2025-06")]
    pub month: Option<String>,
}
