// src/services/deal_service.rs

use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::DealRepository,
    models::deal::{CreateDealPayload, Deal, DealQuery, UpdateDealPayload},
};

#[derive(Clone)]
pub struct DealService {
    repo: DealRepository,
}

impl DealService {
    pub fn new(repo: DealRepository) -> Self {
        Self { repo }
    }

    pub async fn list(&self, query: &DealQuery) -> Result<Vec<Deal>, AppError> {
        let deals = self.repo.list().await?;
        Ok(match query.status {
            Some(status) => deals.into_iter().filter(|d| d.status == status).collect(),
            None => deals,
        })
    }

    /// Lista completa, usada pelas agregações.
    pub async fn all(&self) -> Result<Vec<Deal>, AppError> {
        self.repo.list().await
    }

    pub async fn get(&self, id: Uuid) -> Result<Deal, AppError> {
        self.repo.get(id).await
    }

    pub async fn create(&self, payload: &CreateDealPayload) -> Result<Deal, AppError> {
        self.repo.create(payload).await
    }

    // Qualquer mudança de estágio é permitida
    pub async fn update(&self, id: Uuid, payload: &UpdateDealPayload) -> Result<Deal, AppError> {
        self.repo.update(id, payload).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repo.delete(id).await
    }
}
