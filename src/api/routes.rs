use axum::{routing::get, Router};

use crate::middleware::with_request_tracing;

use super::handlers;
use super::AppState;

/// Creates the recommender service router
pub fn create_router(state: AppState) -> Router {
    let router = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/recommend", get(handlers::recommend))
        .with_state(state);

    with_request_tracing(router)
}
