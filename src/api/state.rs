use std::sync::Arc;

use crate::models::RecommendationMapping;

/// Shared recommender state; the mapping is never mutated after load
#[derive(Clone)]
pub struct AppState {
    pub mapping: Arc<RecommendationMapping>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(RecommendationMapping::builtin())
    }
}

impl AppState {
    pub fn new(mapping: RecommendationMapping) -> Self {
        Self {
            mapping: Arc::new(mapping),
        }
    }
}
