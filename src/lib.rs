pub mod aggregator;
pub mod api_client;
pub mod auth;
pub mod cli;
pub mod config;
pub mod confirm;
pub mod dashboard;
pub mod date_time_provider;
pub mod env_provider;
pub mod form;
pub mod models;
pub mod notifier;
pub mod observable;
pub mod routing;
pub mod session;
pub mod state;
