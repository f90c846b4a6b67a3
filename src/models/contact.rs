// src/models/contact.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::db::{OrderBy, Record};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    // Texto livre, não validado contra nada
    #[serde(default)]
    pub company: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record for Contact {
    const COLLECTION: &'static str = "contacts";

    fn default_order() -> Option<OrderBy> {
        Some(OrderBy::desc("createdAt"))
    }
}

impl Contact {
    /// Busca case-insensitive por substring em nome, e-mail e empresa.
    /// `needle` já deve vir em minúsculas.
    pub fn matches(&self, needle: &str) -> bool {
        let hit = |field: Option<&str>| field.is_some_and(|v| v.to_lowercase().contains(needle));

        hit(Some(&self.name)) || hit(self.email.as_deref()) || hit(self.company.as_deref())
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateContactPayload {
    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Maria da Silva")]
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(email(message = "invalid_email"))]
    #[schema(example = "maria@email.com")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "Acme Corp")]
    pub company: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContactPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "required"))]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(email(message = "invalid_email"))]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
}

// GET /api/contacts?company=...&q=...
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ContactQuery {
    /// Filtro exato por empresa (feito no store)
    pub company: Option<String>,
    /// Busca livre em nome, e-mail e empresa
    pub q: Option<String>,
}
