use std::path::Path;

use crate::{
    error::AppResult,
    models::{ItemId, RecommendationMapping, RecommendationRequest},
    services::slate_builder,
};

/// Loads the slate mapping the service answers from
///
/// A missing file is not an error: the built-in default slate is served
/// until `build-slates` has been run.
pub fn load_mapping(path: &Path) -> AppResult<RecommendationMapping> {
    if !path.exists() {
        tracing::warn!(
            path = %path.display(),
            "Slate file not found, serving built-in default slate"
        );
        return Ok(RecommendationMapping::builtin());
    }

    let mapping = slate_builder::read_mapping(path)?;

    tracing::info!(
        path = %path.display(),
        users = mapping.len(),
        "Loaded slate mapping"
    );

    Ok(mapping)
}

/// First `k` items of the user's slate, or of the default slate
pub fn lookup(mapping: &RecommendationMapping, request: &RecommendationRequest) -> Vec<ItemId> {
    let slate = mapping
        .slate(&request.user)
        .unwrap_or_else(|| mapping.default_slate());

    slate.iter().copied().take(request.k).collect()
}
