// src/services/auth.rs

use bcrypt::{hash, verify};
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use std::{
    collections::HashSet,
    sync::{Arc, RwLock},
};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::UserRepository,
    models::auth::{AuthResponse, Claims, UpdateProfilePayload, User},
};

// Usuário autenticado + as claims do token que ele usou
#[derive(Debug, Clone)]
pub struct Session {
    pub user: User,
    pub claims: Claims,
}

#[derive(Clone)]
pub struct AuthService {
    user_repo: UserRepository,
    jwt_secret: String,
    token_ttl_days: i64,
    // jti dos tokens encerrados via logout. Some ao reiniciar o processo.
    revoked: Arc<RwLock<HashSet<Uuid>>>,
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

impl AuthService {
    pub fn new(user_repo: UserRepository, jwt_secret: String, token_ttl_days: i64) -> Self {
        Self {
            user_repo,
            jwt_secret,
            token_ttl_days,
            revoked: Arc::new(RwLock::new(HashSet::new())),
        }
    }

    pub async fn register_user(&self, name: &str, email: &str, password: &str) -> Result<AuthResponse, AppError> {
        let email = normalize_email(email);

        // Hashing é pesado: roda fora do executor
        let password_clone = password.to_owned();
        let hashed_password = tokio::task::spawn_blocking(move || hash(&password_clone, bcrypt::DEFAULT_COST))
            .await
            .map_err(|e| anyhow::anyhow!("Falha na task de hashing: {}", e))??;

        let user = self
            .user_repo
            .create_user(name.trim(), &email, &hashed_password)
            .await?;

        tracing::info!(user_id = %user.id, "👤 Novo usuário registrado");

        let token = self.create_token(user.id)?;
        Ok(AuthResponse { token, user })
    }

    pub async fn login_user(&self, email: &str, password: &str) -> Result<AuthResponse, AppError> {
        let user = self
            .user_repo
            .find_by_email(&normalize_email(email))
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        let password_clone = password.to_owned();
        let password_hash_clone = user.password_hash.clone();

        // Executa a verificação em um thread separado
        let is_password_valid = tokio::task::spawn_blocking(move || verify(&password_clone, &password_hash_clone))
            .await
            .map_err(|e| anyhow::anyhow!("Falha na task de verificação de senha: {}", e))??;

        if !is_password_valid {
            return Err(AppError::InvalidCredentials);
        }

        let token = self.create_token(user.id)?;
        Ok(AuthResponse { token, user })
    }

    /// Encerra a sessão: o token deixa de valer a partir daqui.
    pub fn logout(&self, claims: &Claims) -> Result<(), AppError> {
        self.revoked
            .write()
            .map_err(|e| anyhow::anyhow!("Lock de revogação envenenado: {}", e))?
            .insert(claims.jti);

        tracing::info!(user_id = %claims.sub, "👋 Logout");
        Ok(())
    }

    pub async fn validate_token(&self, token: &str) -> Result<Session, AppError> {
        let validation = Validation::default();
        let token_data = decode::<Claims>(token, &DecodingKey::from_secret(self.jwt_secret.as_ref()), &validation)
            .map_err(|_| AppError::InvalidToken)?;

        let revoked = self
            .revoked
            .read()
            .map_err(|e| anyhow::anyhow!("Lock de revogação envenenado: {}", e))?
            .contains(&token_data.claims.jti);
        if revoked {
            return Err(AppError::InvalidToken);
        }

        let user = self
            .user_repo
            .find_by_id(token_data.claims.sub)
            .await?
            .ok_or(AppError::UserNotFound)?;

        Ok(Session { user, claims: token_data.claims })
    }

    pub async fn update_profile(&self, user_id: Uuid, patch: &UpdateProfilePayload) -> Result<User, AppError> {
        self.user_repo.update_profile(user_id, patch).await
    }

    fn create_token(&self, user_id: Uuid) -> Result<String, AppError> {
        let now = Utc::now();
        let expires_at = now + chrono::Duration::days(self.token_ttl_days);

        let claims = Claims {
            sub: user_id,
            jti: Uuid::new_v4(),
            exp: expires_at.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        Ok(encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_ref()),
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::InMemoryStore;

    fn service() -> AuthService {
        let repo = UserRepository::new(Arc::new(InMemoryStore::default()));
        AuthService::new(repo, "test-secret".into(), 7)
    }

    #[tokio::test]
    async fn register_then_login() {
        let auth = service();
        let registered = auth.register_user("Ana", "Ana@CRM.dev ", "secret123").await.unwrap();
        assert_eq!(registered.user.email, "ana@crm.dev");

        let logged = auth.login_user("ana@crm.dev", "secret123").await.unwrap();
        assert_eq!(logged.user.id, registered.user.id);

        let session = auth.validate_token(&logged.token).await.unwrap();
        assert_eq!(session.user.id, registered.user.id);
    }

    #[tokio::test]
    async fn wrong_password_is_rejected() {
        let auth = service();
        auth.register_user("Ana", "ana@crm.dev", "secret123").await.unwrap();

        let err = auth.login_user("ana@crm.dev", "nope-nope").await.unwrap_err();
        assert!(matches!(err, AppError::InvalidCredentials));

        let err = auth.login_user("ghost@crm.dev", "secret123").await.unwrap_err();
        assert!(matches!(err, AppError::InvalidCredentials));
    }

    #[tokio::test]
    async fn logout_revokes_only_that_token() {
        let auth = service();
        let first = auth.register_user("Ana", "ana@crm.dev", "secret123").await.unwrap();
        let second = auth.login_user("ana@crm.dev", "secret123").await.unwrap();

        let session = auth.validate_token(&first.token).await.unwrap();
        auth.logout(&session.claims).unwrap();

        assert!(matches!(auth.validate_token(&first.token).await, Err(AppError::InvalidToken)));
        assert!(auth.validate_token(&second.token).await.is_ok());
    }

    #[tokio::test]
    async fn garbage_token_is_invalid() {
        let err = service().validate_token("not.a.jwt").await.unwrap_err();
        assert!(matches!(err, AppError::InvalidToken));
    }
}
