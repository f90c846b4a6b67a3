pub mod activities;
pub mod auth;
pub mod contacts;
pub mod dashboard;
pub mod deals;
pub mod preferences;
pub mod tasks;
pub mod taxation;
pub mod team;
