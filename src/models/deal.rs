// src/models/deal.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::db::{OrderBy, Record};

// --- ENUMS ---

/// Estágio do funil. Qualquer estágio pode ir para qualquer outro.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum DealStatus {
    #[default]
    New,
    Qualified,
    Proposition,
    Negotiation,
    ClosedWon,
    ClosedLost,
}

impl DealStatus {
    /// Ordem fixa do gráfico de funil.
    pub const ALL: [DealStatus; 6] = [
        DealStatus::New,
        DealStatus::Qualified,
        DealStatus::Proposition,
        DealStatus::Negotiation,
        DealStatus::ClosedWon,
        DealStatus::ClosedLost,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DealStatus::New => "New",
            DealStatus::Qualified => "Qualified",
            DealStatus::Proposition => "Proposition",
            DealStatus::Negotiation => "Negotiation",
            DealStatus::ClosedWon => "Closed Won",
            DealStatus::ClosedLost => "Closed Lost",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DealStatus::New => "new",
            DealStatus::Qualified => "qualified",
            DealStatus::Proposition => "proposition",
            DealStatus::Negotiation => "negotiation",
            DealStatus::ClosedWon => "closed-won",
            DealStatus::ClosedLost => "closed-lost",
        }
    }

    /// Negócio ainda em andamento (conta como "ativo" no dashboard)
    pub fn is_active(self) -> bool {
        !matches!(self, DealStatus::ClosedWon | DealStatus::ClosedLost)
    }
}

// --- NEGÓCIO ---

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub value: Decimal,
    #[serde(default)]
    pub status: DealStatus,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub contact_person: Option<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>, format = Date, example = "2025-06-30")]
    pub expected_close_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record for Deal {
    const COLLECTION: &'static str = "deals";

    fn default_order() -> Option<OrderBy> {
        Some(OrderBy::desc("createdAt"))
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDealPayload {
    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Licença anual")]
    pub title: String,

    #[serde(default)]
    #[schema(example = 15000.0)]
    pub value: Decimal,

    #[serde(default)]
    pub status: DealStatus,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "Acme Corp")]
    pub company: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_person: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, format = Date, example = "2025-06-30")]
    pub expected_close_date: Option<NaiveDate>,
}

#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDealPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "required"))]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<DealStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_person: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, format = Date)]
    pub expected_close_date: Option<NaiveDate>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct DealQuery {
    /// Mostra só os negócios nesse estágio
    pub status: Option<DealStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_uses_kebab_case_on_the_wire() {
        assert_eq!(serde_json::to_string(&DealStatus::ClosedWon).unwrap(), "\"closed-won\"");
        let parsed: DealStatus = serde_json::from_str("\"negotiation\"").unwrap();
        assert_eq!(parsed, DealStatus::Negotiation);
        for status in DealStatus::ALL {
            assert_eq!(
                serde_json::to_value(status).unwrap(),
                serde_json::Value::String(status.as_str().into())
            );
        }
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert!(serde_json::from_str::<DealStatus>("\"won\"").is_err());
    }

    #[test]
    fn only_open_stages_are_active() {
        let active: Vec<_> = DealStatus::ALL.into_iter().filter(|s| s.is_active()).collect();
        assert_eq!(
            active,
            vec![
                DealStatus::New,
                DealStatus::Qualified,
                DealStatus::Proposition,
                DealStatus::Negotiation
            ]
        );
    }
}
