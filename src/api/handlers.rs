use axum::{
    extract::{Query, State},
    http::StatusCode,
    Extension, Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{
    error::{AppError, AppResult},
    middleware::RequestId,
    models::{ItemId, RecommendationRequest, DEFAULT_K, DEFAULT_USER, MAX_SLATE_LEN},
    services::recommender,
};

use super::AppState;

#[derive(Debug, Deserialize)]
pub struct RecommendQuery {
    #[serde(default = "default_user")]
    pub user: String,
    /// Kept raw so a non-integer `k` is reported like an out-of-range one
    #[serde(default)]
    pub k: Option<String>,
}

fn default_user() -> String {
    DEFAULT_USER.to_string()
}

impl RecommendQuery {
    /// Unlike chat input, a bad `k` is rejected rather than clamped
    fn validate(self) -> AppResult<RecommendationRequest> {
        let k = match self.k.as_deref() {
            None => DEFAULT_K as i64,
            Some(raw) => raw.trim().parse::<i64>().map_err(|_| {
                AppError::Validation(format!("k must be an integer, got {:?}", raw))
            })?,
        };

        if !(1..=MAX_SLATE_LEN as i64).contains(&k) {
            return Err(AppError::Validation(format!(
                "k must be between 1 and {}, got {}",
                MAX_SLATE_LEN, k
            )));
        }

        Ok(RecommendationRequest::new(self.user, k))
    }
}

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// First `k` items of the user's slate
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(query): Query<RecommendQuery>,
) -> AppResult<Json<Vec<ItemId>>> {
    let request = query.validate()?;
    let items = recommender::lookup(&state.mapping, &request);

    tracing::info!(
        request_id = %request_id,
        user = %request.user,
        k = request.k,
        items = items.len(),
        "Served recommendations"
    );

    Ok(Json(items))
}
