// src/services/team_service.rs

use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::TeamRepository,
    models::team::{CreateTeamMemberPayload, TeamMember, UpdateTeamMemberPayload},
};

#[derive(Clone)]
pub struct TeamService {
    repo: TeamRepository,
}

impl TeamService {
    pub fn new(repo: TeamRepository) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Result<Vec<TeamMember>, AppError> {
        self.repo.list().await
    }

    pub async fn get(&self, id: Uuid) -> Result<TeamMember, AppError> {
        self.repo.get(id).await
    }

    pub async fn create(&self, payload: &CreateTeamMemberPayload) -> Result<TeamMember, AppError> {
        self.repo.create(payload).await
    }

    pub async fn update(&self, id: Uuid, payload: &UpdateTeamMemberPayload) -> Result<TeamMember, AppError> {
        self.repo.update(id, payload).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repo.delete(id).await
    }
}
