use axum::{
    routing::{get, post},
    Router,
};

use crate::middleware::with_request_tracing;

use super::handlers;
use super::BotState;

/// Creates the chat bot router
pub fn create_router(state: BotState) -> Router {
    let router = Router::new()
        .route("/", get(handlers::health))
        .route("/healthz", get(handlers::health))
        .route("/api/messages", post(handlers::messages))
        .with_state(state);

    with_request_tracing(router)
}
