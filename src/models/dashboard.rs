// src/models/dashboard.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// 1. Cards do topo do dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_contacts: usize,
    pub total_deals: usize,
    pub active_deals: usize, // new, qualified, proposition, negotiation
    pub total_value: Decimal,
}

// Uma barra/fatia de gráfico de contagem
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CountEntry {
    pub label: String,
    pub count: usize,
}

// Uma barra/ponto de gráfico de soma
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AmountEntry {
    pub label: String,
    pub total: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WinLoss {
    pub won: usize,
    pub lost: usize,
}

// 2. Gráficos do dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardCharts {
    pub pipeline: Vec<CountEntry>,
    pub monthly_revenue: Vec<AmountEntry>,
    pub win_loss: WinLoss,
    pub activities: Vec<CountEntry>,
}

// 3. Ranking de empresas por valor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompanyTotal {
    pub company: String,
    pub total_value: Decimal,
    pub deals_count: usize,
}

// 4. Página de relatórios
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DealReport {
    pub deals_by_status: Vec<CountEntry>,
    pub total_deals_value: Decimal,
    pub monthly_deals: Vec<AmountEntry>,
    pub top_companies: Vec<CompanyTotal>,
    /// Percentual de negócios ganhos (0 quando não há negócios)
    pub conversion_rate: f64,
}

// 5. Gráficos da página de impostos
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaxCharts {
    pub by_type: Vec<AmountEntry>,
    pub by_status: Vec<CountEntry>,
    pub monthly: Vec<AmountEntry>,
}
