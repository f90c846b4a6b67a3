// src/models/preferences.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::db::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Preferências do usuário. Um documento por usuário, chaveado pelo id dele.
/// O "modo escuro" do front-end é o `theme`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    #[serde(default)]
    pub theme: Theme,
    #[serde(default = "default_true")]
    pub notifications: bool,
    #[serde(default = "default_true")]
    pub email_updates: bool,
    #[serde(default = "default_language")]
    #[schema(example = "en")]
    pub language: String,
    pub user_id: Uuid,
    // None enquanto o usuário nunca salvou nada
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Record for UserPreferences {
    const COLLECTION: &'static str = "userPreferences";
}

fn default_true() -> bool {
    true
}

fn default_language() -> String {
    "en".to_string()
}

impl UserPreferences {
    /// Valores usados quando o usuário ainda não tem documento salvo.
    pub fn defaults_for(user_id: Uuid) -> Self {
        Self {
            theme: Theme::default(),
            notifications: true,
            email_updates: true,
            language: default_language(),
            user_id,
            updated_at: None,
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePreferencesPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notifications: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_updates: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 2, max = 5, message = "invalid_language"))]
    #[schema(example = "pt")]
    pub language: Option<String>,
}

// Campos gravados no upsert: o patch + o dono
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesDocument<'a> {
    #[serde(flatten)]
    pub patch: &'a UpdatePreferencesPayload,
    pub user_id: Uuid,
}
