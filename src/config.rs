// src/config.rs

use anyhow::Context;
use std::{env, sync::Arc};

use crate::{
    db::{
        ActivityRepository, ContactRepository, DealRepository, InMemoryStore, PgDocumentStore,
        PreferencesRepository, RecordStore, TaskRepository, TaxRepository, TeamRepository,
        UserRepository,
    },
    services::{
        activity_service::ActivityService, auth::AuthService, calendar_service::CalendarService,
        contact_service::ContactService, dashboard_service::DashboardService,
        deal_service::DealService, preferences_service::PreferencesService,
        sentiment_service::SentimentService, task_service::TaskService, tax_service::TaxService,
        team_service::TeamService,
    },
};

const DEFAULT_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_TOKEN_TTL_DAYS: i64 = 7;

// Configuração lida do ambiente (e do .env, se existir)
#[derive(Debug, Clone)]
pub struct Settings {
    pub jwt_secret: String,
    // Sem DATABASE_URL a aplicação sobe com o store em memória
    pub database_url: Option<String>,
    pub app_addr: String,
    pub token_ttl_days: i64,
}

impl Settings {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let jwt_secret = env::var("JWT_SECRET").context("JWT_SECRET deve ser definido")?;
        let database_url = env::var("DATABASE_URL").ok().filter(|url| !url.trim().is_empty());
        let app_addr = env::var("APP_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());

        let token_ttl_days = match env::var("TOKEN_TTL_DAYS") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("TOKEN_TTL_DAYS inválido: '{raw}'"))?,
            Err(_) => DEFAULT_TOKEN_TTL_DAYS,
        };

        Ok(Self { jwt_secret, database_url, app_addr, token_ttl_days })
    }
}

#[derive(Clone)]
pub struct AppState {
    pub auth_service: AuthService,
    pub contact_service: ContactService,
    pub deal_service: DealService,
    pub task_service: TaskService,
    pub tax_service: TaxService,
    pub team_service: TeamService,
    pub activity_service: ActivityService,
    pub preferences_service: PreferencesService,
    pub calendar_service: CalendarService,
    pub dashboard_service: DashboardService,
    pub sentiment_service: SentimentService,
}

impl AppState {
    pub async fn new(settings: &Settings) -> anyhow::Result<Self> {
        let store: Arc<dyn RecordStore> = match settings.database_url.as_deref() {
            Some(url) => Arc::new(PgDocumentStore::connect(url).await?),
            None => {
                tracing::warn!("⚠️ DATABASE_URL não definida: usando store em memória (os dados somem ao reiniciar)");
                Arc::new(InMemoryStore::new())
            }
        };

        Ok(Self::with_store(store, settings.jwt_secret.clone(), settings.token_ttl_days))
    }

    /// Estado completo sobre o store em memória (usado nos testes).
    pub fn in_memory(jwt_secret: &str) -> Self {
        Self::with_store(Arc::new(InMemoryStore::new()), jwt_secret.to_string(), DEFAULT_TOKEN_TTL_DAYS)
    }

    // --- Monta o gráfico de dependências ---
    pub fn with_store(store: Arc<dyn RecordStore>, jwt_secret: String, token_ttl_days: i64) -> Self {
        let user_repo = UserRepository::new(store.clone());
        let contact_repo = ContactRepository::new(store.clone());
        let deal_repo = DealRepository::new(store.clone());
        let task_repo = TaskRepository::new(store.clone());
        let activity_repo = ActivityRepository::new(store.clone());

        let deal_service = DealService::new(deal_repo.clone());
        let task_service = TaskService::new(task_repo);

        Self {
            auth_service: AuthService::new(user_repo, jwt_secret, token_ttl_days),
            contact_service: ContactService::new(contact_repo.clone()),
            tax_service: TaxService::new(TaxRepository::new(store.clone())),
            team_service: TeamService::new(TeamRepository::new(store.clone())),
            activity_service: ActivityService::new(activity_repo.clone()),
            preferences_service: PreferencesService::new(PreferencesRepository::new(store.clone())),
            calendar_service: CalendarService::new(task_service.clone(), deal_service.clone()),
            dashboard_service: DashboardService::new(contact_repo, deal_repo, activity_repo),
            sentiment_service: SentimentService::new(),
            deal_service,
            task_service,
        }
    }
}
