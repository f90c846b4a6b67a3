// src/models/activity.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::db::{OrderBy, Record};

/// Atividade recente (ligação, e-mail, reunião...). O tipo é texto livre.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: Uuid,
    #[serde(rename = "type")]
    #[schema(example = "call")]
    pub activity_type: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record for Activity {
    const COLLECTION: &'static str = "activities";

    fn default_order() -> Option<OrderBy> {
        Some(OrderBy::desc("timestamp"))
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateActivityPayload {
    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "meeting")]
    pub activity_type: String,

    /// Padrão: agora
    pub timestamp: Option<DateTime<Utc>>,

    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewActivity {
    #[serde(rename = "type")]
    pub activity_type: String,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
