// src/models/tax.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::db::{OrderBy, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
pub enum TaxType {
    #[default]
    #[serde(rename = "GST")]
    Gst,
    #[serde(rename = "TDS")]
    Tds,
    #[serde(rename = "Income Tax")]
    IncomeTax,
    #[serde(rename = "Professional Tax")]
    ProfessionalTax,
}

impl TaxType {
    pub const ALL: [TaxType; 4] = [
        TaxType::Gst,
        TaxType::Tds,
        TaxType::IncomeTax,
        TaxType::ProfessionalTax,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TaxType::Gst => "GST",
            TaxType::Tds => "TDS",
            TaxType::IncomeTax => "Income Tax",
            TaxType::ProfessionalTax => "Professional Tax",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TaxStatus {
    #[default]
    Pending,
    Paid,
    Overdue,
}

impl TaxStatus {
    /// Ordem do gráfico de status.
    pub const CHART_ORDER: [TaxStatus; 3] = [TaxStatus::Paid, TaxStatus::Pending, TaxStatus::Overdue];

    pub fn as_str(self) -> &'static str {
        match self {
            TaxStatus::Pending => "pending",
            TaxStatus::Paid => "paid",
            TaxStatus::Overdue => "overdue",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaxRecord {
    pub id: Uuid,
    pub client_name: String,
    #[serde(default)]
    pub gst_number: Option<String>,
    #[serde(default)]
    pub pan_number: Option<String>,
    #[serde(default)]
    pub tax_type: TaxType,
    #[serde(default)]
    pub amount: Decimal,
    #[serde(default)]
    pub tax_rate: Decimal,
    /// Derivado: amount × taxRate / 100, com 2 casas ("180.00")
    #[schema(example = "180.00")]
    pub tax_amount: String,
    #[serde(default)]
    #[schema(value_type = Option<String>, format = Date)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: TaxStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record for TaxRecord {
    const COLLECTION: &'static str = "taxRecords";

    fn default_order() -> Option<OrderBy> {
        Some(OrderBy::desc("createdAt"))
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaxRecordPayload {
    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Acme Corp")]
    pub client_name: String,

    #[schema(example = "27AAPFU0939F1ZV")]
    pub gst_number: Option<String>,

    #[schema(example = "AAPFU0939F")]
    pub pan_number: Option<String>,

    #[serde(default)]
    pub tax_type: TaxType,

    #[schema(example = 1000.0)]
    pub amount: Decimal,

    #[schema(example = 18.0)]
    pub tax_rate: Decimal,

    #[schema(value_type = Option<String>, format = Date)]
    pub due_date: Option<NaiveDate>,

    #[serde(default)]
    pub status: TaxStatus,
}

// Documento gravado, já com o valor do imposto calculado
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTaxRecord {
    pub client_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gst_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pan_number: Option<String>,
    pub tax_type: TaxType,
    pub amount: Decimal,
    pub tax_rate: Decimal,
    pub tax_amount: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    pub status: TaxStatus,
}

#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaxRecordPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "required"))]
    pub client_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gst_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pan_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_type: Option<TaxType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_rate: Option<Decimal>,

    // Preenchido pelo serviço, nunca pelo cliente
    #[serde(skip_deserializing, skip_serializing_if = "Option::is_none")]
    #[schema(ignore)]
    pub tax_amount: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, format = Date)]
    pub due_date: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaxStatus>,
}

// Pré-visualização do imposto enquanto o formulário é preenchido
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaxPreviewPayload {
    #[schema(example = 1000.0)]
    pub amount: Decimal,
    #[schema(example = 18.0)]
    pub tax_rate: Decimal,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaxPreview {
    #[schema(example = "180.00")]
    pub tax_amount: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tax_type_wire_names() {
        assert_eq!(serde_json::to_string(&TaxType::IncomeTax).unwrap(), "\"Income Tax\"");
        let parsed: TaxType = serde_json::from_str("\"Professional Tax\"").unwrap();
        assert_eq!(parsed, TaxType::ProfessionalTax);
        for t in TaxType::ALL {
            assert_eq!(serde_json::to_value(t).unwrap(), serde_json::Value::String(t.label().into()));
        }
    }

    #[test]
    fn unknown_tax_status_is_rejected() {
        assert!(serde_json::from_str::<TaxStatus>("\"cancelled\"").is_err());
    }
}
