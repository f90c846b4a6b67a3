// src/services/tax_service.rs

use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::TaxRepository,
    models::{
        dashboard::TaxCharts,
        tax::{CreateTaxRecordPayload, NewTaxRecord, TaxPreview, TaxPreviewPayload, TaxRecord, UpdateTaxRecordPayload},
    },
    services::analytics,
};

#[derive(Clone)]
pub struct TaxService {
    repo: TaxRepository,
}

impl TaxService {
    pub fn new(repo: TaxRepository) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Result<Vec<TaxRecord>, AppError> {
        self.repo.list().await
    }

    pub async fn get(&self, id: Uuid) -> Result<TaxRecord, AppError> {
        self.repo.get(id).await
    }

    pub async fn create(&self, payload: CreateTaxRecordPayload) -> Result<TaxRecord, AppError> {
        let record = NewTaxRecord {
            tax_amount: analytics::tax_amount(payload.amount, payload.tax_rate),
            client_name: payload.client_name,
            gst_number: payload.gst_number,
            pan_number: payload.pan_number,
            tax_type: payload.tax_type,
            amount: payload.amount,
            tax_rate: payload.tax_rate,
            due_date: payload.due_date,
            status: payload.status,
        };

        self.repo.create(&record).await
    }

    // Se valor ou alíquota mudarem, o imposto é recalculado com o que
    // já está salvo completando o que não veio no patch.
    pub async fn update(&self, id: Uuid, mut payload: UpdateTaxRecordPayload) -> Result<TaxRecord, AppError> {
        payload.tax_amount = None;

        if payload.amount.is_some() || payload.tax_rate.is_some() {
            let current = self.repo.get(id).await?;
            let amount = payload.amount.unwrap_or(current.amount);
            let tax_rate = payload.tax_rate.unwrap_or(current.tax_rate);
            payload.tax_amount = Some(analytics::tax_amount(amount, tax_rate));
        }

        self.repo.update(id, &payload).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repo.delete(id).await
    }

    pub fn preview(&self, payload: &TaxPreviewPayload) -> TaxPreview {
        TaxPreview { tax_amount: analytics::tax_amount(payload.amount, payload.tax_rate) }
    }

    pub async fn charts(&self) -> Result<TaxCharts, AppError> {
        let records = self.repo.list().await?;

        Ok(TaxCharts {
            by_type: analytics::tax_by_type(&records),
            by_status: analytics::tax_by_status(&records),
            monthly: analytics::monthly_tax_amount(&records),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        db::InMemoryStore,
        models::tax::{TaxStatus, TaxType},
    };
    use rust_decimal::Decimal;
    use std::sync::Arc;

    fn service() -> TaxService {
        TaxService::new(TaxRepository::new(Arc::new(InMemoryStore::default())))
    }

    fn payload(amount: i64, rate: i64) -> CreateTaxRecordPayload {
        CreateTaxRecordPayload {
            client_name: "Acme".into(),
            gst_number: None,
            pan_number: None,
            tax_type: TaxType::Gst,
            amount: Decimal::from(amount),
            tax_rate: Decimal::from(rate),
            due_date: None,
            status: TaxStatus::Pending,
        }
    }

    #[tokio::test]
    async fn create_computes_tax_amount() {
        let record = service().create(payload(1000, 18)).await.unwrap();
        assert_eq!(record.tax_amount, "180.00");
    }

    #[tokio::test]
    async fn changing_rate_recomputes_with_stored_amount() {
        let svc = service();
        let record = svc.create(payload(1000, 18)).await.unwrap();

        let patch = UpdateTaxRecordPayload { tax_rate: Some(Decimal::from(5)), ..Default::default() };
        let updated = svc.update(record.id, patch).await.unwrap();

        assert_eq!(updated.amount, Decimal::from(1000));
        assert_eq!(updated.tax_amount, "50.00");
    }

    #[tokio::test]
    async fn status_change_keeps_tax_amount() {
        let svc = service();
        let record = svc.create(payload(200, 10)).await.unwrap();

        let patch = UpdateTaxRecordPayload { status: Some(TaxStatus::Paid), ..Default::default() };
        let updated = svc.update(record.id, patch).await.unwrap();

        assert_eq!(updated.status, TaxStatus::Paid);
        assert_eq!(updated.tax_amount, "20.00");
    }

    #[tokio::test]
    async fn updating_unknown_record_is_not_found() {
        let patch = UpdateTaxRecordPayload { amount: Some(Decimal::from(1)), ..Default::default() };
        let err = service().update(Uuid::new_v4(), patch).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[test]
    fn preview_matches_create() {
        let preview = service().preview(&TaxPreviewPayload {
            amount: Decimal::from(1000),
            tax_rate: Decimal::from(18),
        });
        assert_eq!(preview.tax_amount, "180.00");
    }
}
