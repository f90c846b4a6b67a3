pub mod activity;
pub mod auth;
pub mod calendar;
pub mod contact;
pub mod dashboard;
pub mod deal;
pub mod preferences;
pub mod sentiment;
pub mod task;
pub mod tax;
pub mod team;
