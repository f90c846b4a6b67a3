// src/docs.rs

use utoipa::OpenApi;
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Auth ---
        handlers::auth::register,
        handlers::auth::login,
        handlers::auth::logout,

        // --- Users ---
        handlers::auth::get_me,
        handlers::auth::update_me,

        // --- Contacts ---
        handlers::contacts::list_contacts,
        handlers::contacts::create_contact,
        handlers::contacts::get_contact,
        handlers::contacts::update_contact,
        handlers::contacts::delete_contact,

        // --- Deals ---
        handlers::deals::list_deals,
        handlers::deals::create_deal,
        handlers::deals::get_deal,
        handlers::deals::update_deal,
        handlers::deals::delete_deal,

        // --- Tasks ---
        handlers::tasks::list_tasks,
        handlers::tasks::create_task,
        handlers::tasks::get_task,
        handlers::tasks::update_task,
        handlers::tasks::delete_task,

        // --- Taxation ---
        handlers::taxation::list_tax_records,
        handlers::taxation::create_tax_record,
        handlers::taxation::get_tax_record,
        handlers::taxation::update_tax_record,
        handlers::taxation::delete_tax_record,
        handlers::taxation::get_tax_charts,
        handlers::taxation::preview_tax,

        // --- Team ---
        handlers::team::list_team_members,
        handlers::team::create_team_member,
        handlers::team::get_team_member,
        handlers::team::update_team_member,
        handlers::team::delete_team_member,

        // --- Activities ---
        handlers::activities::list_activities,
        handlers::activities::create_activity,

        // --- Preferences ---
        handlers::preferences::get_preferences,
        handlers::preferences::update_preferences,

        // --- Dashboard, relatórios, calendário, sentimento ---
        handlers::dashboard::get_stats,
        handlers::dashboard::get_charts,
        handlers::dashboard::get_report,
        handlers::dashboard::get_calendar,
        handlers::dashboard::analyze_sentiment,
    ),
    components(
        schemas(
            // --- Auth ---
            models::auth::User,
            models::auth::RegisterUserPayload,
            models::auth::LoginUserPayload,
            models::auth::UpdateProfilePayload,
            models::auth::AuthResponse,

            // --- Contacts ---
            models::contact::Contact,
            models::contact::CreateContactPayload,
            models::contact::UpdateContactPayload,

            // --- Deals ---
            models::deal::DealStatus,
            models::deal::Deal,
            models::deal::CreateDealPayload,
            models::deal::UpdateDealPayload,

            // --- Tasks ---
            models::task::Priority,
            models::task::TaskStatus,
            models::task::Task,
            models::task::CreateTaskPayload,
            models::task::UpdateTaskPayload,

            // --- Taxation ---
            models::tax::TaxType,
            models::tax::TaxStatus,
            models::tax::TaxRecord,
            models::tax::CreateTaxRecordPayload,
            models::tax::UpdateTaxRecordPayload,
            models::tax::TaxPreviewPayload,
            models::tax::TaxPreview,

            // --- Team ---
            models::team::TeamRole,
            models::team::TeamMember,
            models::team::CreateTeamMemberPayload,
            models::team::UpdateTeamMemberPayload,

            // --- Activities ---
            models::activity::Activity,
            models::activity::CreateActivityPayload,

            // --- Preferences ---
            models::preferences::Theme,
            models::preferences::UserPreferences,
            models::preferences::UpdatePreferencesPayload,

            // --- Dashboard ---
            models::dashboard::DashboardStats,
            models::dashboard::CountEntry,
            models::dashboard::AmountEntry,
            models::dashboard::WinLoss,
            models::dashboard::DashboardCharts,
            models::dashboard::CompanyTotal,
            models::dashboard::DealReport,
            models::dashboard::TaxCharts,

            // --- Calendar / Sentiment ---
            models::calendar::EventType,
            models::calendar::CalendarEvent,
            models::sentiment::SentimentPayload,
            models::sentiment::SentimentLabel,
            models::sentiment::SentimentScores,
            models::sentiment::SentimentAnalysis,
        )
    ),
    tags(
        (name = "Auth", description = "Autenticação e Registro"),
        (name = "Users", description = "Dados do Usuário e Perfil"),
        (name = "Contacts", description = "Contatos"),
        (name = "Deals", description = "Negócios e Funil de Vendas"),
        (name = "Tasks", description = "Tarefas"),
        (name = "Taxation", description = "Registros de Impostos"),
        (name = "Team", description = "Membros da Equipe"),
        (name = "Activities", description = "Atividades Recentes"),
        (name = "Preferences", description = "Preferências do Usuário"),
        (name = "Dashboard", description = "Indicadores e Gráficos Gerenciais"),
        (name = "Reports", description = "Relatórios de Negócios"),
        (name = "Calendar", description = "Calendário de Tarefas e Negócios"),
        (name = "Sentiment", description = "Análise de Sentimento de Texto")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "api_jwt",
            SecurityScheme::Http(
                Http::new(HttpAuthScheme::Bearer)
            ),
        );
    }
}
