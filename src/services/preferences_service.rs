// src/services/preferences_service.rs

use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::PreferencesRepository,
    models::preferences::{PreferencesDocument, UpdatePreferencesPayload, UserPreferences},
};

// O documento de preferências usa o id do próprio usuário como chave
#[derive(Clone)]
pub struct PreferencesService {
    repo: PreferencesRepository,
}

impl PreferencesService {
    pub fn new(repo: PreferencesRepository) -> Self {
        Self { repo }
    }

    pub async fn get(&self, user_id: Uuid) -> Result<UserPreferences, AppError> {
        Ok(self
            .repo
            .find(user_id)
            .await?
            .unwrap_or_else(|| UserPreferences::defaults_for(user_id)))
    }

    // Cria na primeira vez, depois mescla só os campos enviados
    pub async fn save(&self, user_id: Uuid, patch: &UpdatePreferencesPayload) -> Result<UserPreferences, AppError> {
        let document = PreferencesDocument { patch, user_id };
        self.repo.upsert(user_id, &document).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{db::InMemoryStore, models::preferences::Theme};
    use std::sync::Arc;

    fn service() -> PreferencesService {
        PreferencesService::new(PreferencesRepository::new(Arc::new(InMemoryStore::default())))
    }

    #[tokio::test]
    async fn defaults_before_first_save() {
        let user = Uuid::new_v4();
        let prefs = service().get(user).await.unwrap();

        assert_eq!(prefs.theme, Theme::Light);
        assert!(prefs.notifications);
        assert!(prefs.email_updates);
        assert_eq!(prefs.language, "en");
        assert_eq!(prefs.user_id, user);
        assert!(prefs.updated_at.is_none());
    }

    #[tokio::test]
    async fn saves_merge_field_by_field() {
        let svc = service();
        let user = Uuid::new_v4();

        let dark = UpdatePreferencesPayload { theme: Some(Theme::Dark), ..Default::default() };
        svc.save(user, &dark).await.unwrap();

        let quiet = UpdatePreferencesPayload { notifications: Some(false), ..Default::default() };
        svc.save(user, &quiet).await.unwrap();

        let prefs = svc.get(user).await.unwrap();
        assert_eq!(prefs.theme, Theme::Dark);
        assert!(!prefs.notifications);
        assert!(prefs.email_updates);
        assert!(prefs.updated_at.is_some());
    }

    #[tokio::test]
    async fn users_do_not_share_preferences() {
        let svc = service();
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());

        svc.save(a, &UpdatePreferencesPayload { language: Some("pt".into()), ..Default::default() })
            .await
            .unwrap();

        assert_eq!(svc.get(a).await.unwrap().language, "pt");
        assert_eq!(svc.get(b).await.unwrap().language, "en");
    }
}
