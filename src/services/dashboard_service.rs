// src/services/dashboard_service.rs

use chrono::Utc;

use crate::{
    common::error::AppError,
    db::{ActivityRepository, ContactRepository, DealRepository},
    models::dashboard::{DashboardCharts, DashboardStats, DealReport},
    services::analytics,
};

// Dashboard e relatórios: carrega as coleções inteiras e agrega em memória
#[derive(Clone)]
pub struct DashboardService {
    contacts: ContactRepository,
    deals: DealRepository,
    activities: ActivityRepository,
}

impl DashboardService {
    pub fn new(contacts: ContactRepository, deals: DealRepository, activities: ActivityRepository) -> Self {
        Self { contacts, deals, activities }
    }

    pub async fn get_stats(&self) -> Result<DashboardStats, AppError> {
        let contacts = self.contacts.list().await?;
        let deals = self.deals.list().await?;

        Ok(analytics::dashboard_stats(contacts.len(), &deals))
    }

    pub async fn get_charts(&self) -> Result<DashboardCharts, AppError> {
        let deals = self.deals.list().await?;
        let activities = self.activities.list().await?;
        let today = Utc::now().date_naive();

        Ok(DashboardCharts {
            pipeline: analytics::pipeline_by_stage(&deals),
            monthly_revenue: analytics::monthly_revenue(&deals, today),
            win_loss: analytics::win_loss(&deals),
            activities: analytics::activity_by_type(&activities),
        })
    }

    pub async fn get_deal_report(&self) -> Result<DealReport, AppError> {
        let deals = self.deals.list().await?;

        Ok(DealReport {
            deals_by_status: analytics::deals_by_status(&deals),
            total_deals_value: analytics::total_value(&deals),
            monthly_deals: analytics::monthly_deal_value(&deals),
            top_companies: analytics::top_companies(&deals, analytics::TOP_COMPANIES_LIMIT),
            conversion_rate: analytics::conversion_rate(&deals),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        db::{InMemoryStore, RecordStore},
        models::deal::{CreateDealPayload, DealStatus},
    };
    use rust_decimal::Decimal;
    use std::sync::Arc;

    fn service(store: Arc<dyn RecordStore>) -> DashboardService {
        DashboardService::new(
            ContactRepository::new(store.clone()),
            DealRepository::new(store.clone()),
            ActivityRepository::new(store),
        )
    }

    #[tokio::test]
    async fn empty_store_gives_zeroed_dashboard() {
        let svc = service(Arc::new(InMemoryStore::default()));

        let stats = svc.get_stats().await.unwrap();
        assert_eq!(stats.total_deals, 0);
        assert_eq!(stats.total_value, Decimal::ZERO);

        let charts = svc.get_charts().await.unwrap();
        assert_eq!(charts.pipeline.len(), 6);
        assert!(charts.monthly_revenue.is_empty());
        assert!(charts.activities.is_empty());

        let report = svc.get_deal_report().await.unwrap();
        assert_eq!(report.conversion_rate, 0.0);
        assert!(report.top_companies.is_empty());
    }

    #[tokio::test]
    async fn report_reflects_stored_deals() {
        let store: Arc<dyn RecordStore> = Arc::new(InMemoryStore::default());
        let deals = DealRepository::new(store.clone());
        for (status, value) in [(DealStatus::ClosedWon, 300), (DealStatus::New, 100)] {
            deals
                .create(&CreateDealPayload {
                    title: "d".into(),
                    value: Decimal::from(value),
                    status,
                    company: Some("Acme".into()),
                    contact_person: None,
                    expected_close_date: None,
                })
                .await
                .unwrap();
        }

        let report = service(store).get_deal_report().await.unwrap();
        assert_eq!(report.total_deals_value, Decimal::from(400));
        assert_eq!(report.conversion_rate, 50.0);
        assert_eq!(report.top_companies[0].deals_count, 2);
    }
}
