pub mod api;
pub mod bot;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;
pub mod telemetry;
