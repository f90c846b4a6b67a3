pub mod activity_service;
pub mod analytics;
pub mod auth;
pub mod calendar_service;
pub mod contact_service;
pub mod dashboard_service;
pub mod deal_service;
pub mod preferences_service;
pub mod sentiment_service;
pub mod task_service;
pub mod tax_service;
pub mod team_service;
