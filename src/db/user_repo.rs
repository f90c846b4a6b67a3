// src/db/user_repo.rs

use std::sync::Arc;
use uuid::Uuid;

use super::{RecordStore, Repository};
use crate::{
    common::error::AppError,
    models::auth::{NewUser, UpdateProfilePayload, User},
};

// O repositório de usuários, responsável por todas as interações com a coleção 'users'
#[derive(Clone)]
pub struct UserRepository {
    users: Repository<User>,
}

impl UserRepository {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { users: Repository::new(store) }
    }

    // Busca um usuário pelo seu e-mail (comparação exata, já normalizado)
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let mut found = self.users.find_by("email", email).await?;
        Ok(if found.is_empty() { None } else { Some(found.swap_remove(0)) })
    }

    // Busca um usuário pelo seu ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AppError> {
        self.users.find(id).await
    }

    // Cria um novo usuário. E-mail repetido vira EmailAlreadyExists.
    // A checagem não é atômica: dois registros simultâneos podem passar.
    pub async fn create_user(&self, name: &str, email: &str, password_hash: &str) -> Result<User, AppError> {
        if self.find_by_email(email).await?.is_some() {
            return Err(AppError::EmailAlreadyExists);
        }

        self.users
            .create(&NewUser { name, email, password_hash })
            .await
    }

    pub async fn update_profile(&self, id: Uuid, patch: &UpdateProfilePayload) -> Result<User, AppError> {
        self.users.update(id, patch).await.map_err(|e| match e {
            AppError::NotFound { .. } => AppError::UserNotFound,
            other => other,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::InMemoryStore;

    fn repo() -> UserRepository {
        UserRepository::new(Arc::new(InMemoryStore::default()))
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let repo = repo();
        repo.create_user("Ana", "ana@crm.dev", "hash").await.unwrap();

        let err = repo.create_user("Outra Ana", "ana@crm.dev", "hash").await.unwrap_err();
        assert!(matches!(err, AppError::EmailAlreadyExists));
    }

    #[tokio::test]
    async fn finds_by_email_and_id() {
        let repo = repo();
        let created = repo.create_user("Bia", "bia@crm.dev", "secret-hash").await.unwrap();

        let by_email = repo.find_by_email("bia@crm.dev").await.unwrap().unwrap();
        assert_eq!(by_email.id, created.id);
        assert_eq!(by_email.password_hash, "secret-hash");

        assert!(repo.find_by_id(created.id).await.unwrap().is_some());
        assert!(repo.find_by_email("nobody@crm.dev").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn profile_update_keeps_email() {
        let repo = repo();
        let created = repo.create_user("Caio", "caio@crm.dev", "h").await.unwrap();

        let patch = UpdateProfilePayload { name: None, phone: Some("555-0101".into()) };
        let updated = repo.update_profile(created.id, &patch).await.unwrap();

        assert_eq!(updated.name, "Caio");
        assert_eq!(updated.email, "caio@crm.dev");
        assert_eq!(updated.phone.as_deref(), Some("555-0101"));
    }

    #[tokio::test]
    async fn updating_unknown_user_fails() {
        let patch = UpdateProfilePayload { name: Some("X".into()), phone: None };
        let err = repo().update_profile(Uuid::new_v4(), &patch).await.unwrap_err();
        assert!(matches!(err, AppError::UserNotFound));
    }
}
