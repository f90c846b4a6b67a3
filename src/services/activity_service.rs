// src/services/activity_service.rs

use chrono::Utc;

use crate::{
    common::error::AppError,
    db::ActivityRepository,
    models::activity::{Activity, CreateActivityPayload, NewActivity},
};

#[derive(Clone)]
pub struct ActivityService {
    repo: ActivityRepository,
}

impl ActivityService {
    pub fn new(repo: ActivityRepository) -> Self {
        Self { repo }
    }

    // Mais recentes primeiro (por timestamp)
    pub async fn list(&self) -> Result<Vec<Activity>, AppError> {
        self.repo.list().await
    }

    pub async fn create(&self, payload: CreateActivityPayload) -> Result<Activity, AppError> {
        let activity = NewActivity {
            activity_type: payload.activity_type,
            timestamp: payload.timestamp.unwrap_or_else(Utc::now),
            description: payload.description,
        };
        self.repo.create(&activity).await
    }
}
