use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    error::AppResult,
    models::{ItemId, RecommendationMapping, DEFAULT_SLATE_KEY, MAX_SLATE_LEN},
};

/// Tables the slate builder works from
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SlateBuilderInput {
    /// Items each user already interacted with
    pub history: BTreeMap<String, Vec<ItemId>>,
    /// Global popularity ranking, most popular first
    pub popular: Vec<ItemId>,
}

impl Default for SlateBuilderInput {
    fn default() -> Self {
        let mut history = BTreeMap::new();
        history.insert("1".to_string(), vec![101, 103]);
        history.insert("2".to_string(), vec![102]);
        history.insert("3".to_string(), vec![]);

        Self {
            history,
            popular: vec![101, 102, 103, 104, 105, 106, 107],
        }
    }
}

impl SlateBuilderInput {
    /// Reads `{"history": {...}, "popular": [...]}` from a JSON file
    pub fn from_file(path: &Path) -> AppResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

/// Builds every user's slate as popular items minus already-seen items
///
/// Each slate keeps popularity order and is capped at `MAX_SLATE_LEN`. The
/// `_default` slate is the head of the popularity list regardless of history.
pub fn build_mapping(input: &SlateBuilderInput) -> RecommendationMapping {
    let mut mapping = RecommendationMapping::default();

    for (user, seen) in &input.history {
        let seen: HashSet<ItemId> = seen.iter().copied().collect();
        let slate: Vec<ItemId> = input
            .popular
            .iter()
            .copied()
            .filter(|item| !seen.contains(item))
            .take(MAX_SLATE_LEN)
            .collect();
        mapping.insert(user.clone(), slate);
    }

    mapping.insert(
        DEFAULT_SLATE_KEY,
        input.popular.iter().copied().take(MAX_SLATE_LEN).collect(),
    );

    mapping
}

/// Writes the mapping as indented JSON, replacing any previous file
pub fn write_mapping(path: &Path, mapping: &RecommendationMapping) -> AppResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(mapping)?;
    std::fs::write(path, json)?;

    tracing::info!(
        path = %path.display(),
        users = mapping.len(),
        "Slate mapping written"
    );

    Ok(())
}

/// Reads a mapping previously written by `write_mapping`
pub fn read_mapping(path: &Path) -> AppResult<RecommendationMapping> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
