// src/models/team.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::db::{OrderBy, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TeamRole {
    #[default]
    Member,
    Admin,
    Manager,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: TeamRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record for TeamMember {
    const COLLECTION: &'static str = "team";

    fn default_order() -> Option<OrderBy> {
        Some(OrderBy::asc("createdAt"))
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeamMemberPayload {
    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "João Souza")]
    pub name: String,

    #[validate(email(message = "invalid_email"))]
    #[schema(example = "joao@empresa.com")]
    pub email: String,

    #[serde(default)]
    pub role: TeamRole,
}

#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTeamMemberPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "required"))]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(email(message = "invalid_email"))]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<TeamRole>,
}
