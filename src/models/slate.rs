use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::ItemId;

/// Longest slate ever stored or served
pub const MAX_SLATE_LEN: usize = 10;

/// Number of items served when the caller does not ask for a count
pub const DEFAULT_K: usize = 5;

/// User id assumed when a request does not name one
pub const DEFAULT_USER: &str = "1";

/// Mapping key used for users absent from the mapping
pub const DEFAULT_SLATE_KEY: &str = "_default";

/// Per-user slates keyed by user identifier, plus the `_default` slate
///
/// Serialized as a flat JSON object so the file written by the slate builder
/// is exactly what the recommender loads.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct RecommendationMapping {
    slates: BTreeMap<String, Vec<ItemId>>,
}

impl RecommendationMapping {
    pub fn new(slates: BTreeMap<String, Vec<ItemId>>) -> Self {
        Self { slates }
    }

    /// Mapping served when no slate file has been built yet
    pub fn builtin() -> Self {
        let mut slates = BTreeMap::new();
        slates.insert(DEFAULT_SLATE_KEY.to_string(), vec![101, 102, 103, 104, 105]);
        Self { slates }
    }

    pub fn insert(&mut self, user: impl Into<String>, slate: Vec<ItemId>) {
        self.slates.insert(user.into(), slate);
    }

    /// The user's own slate, if present and non-empty
    pub fn slate(&self, user: &str) -> Option<&[ItemId]> {
        self.slates
            .get(user)
            .map(Vec::as_slice)
            .filter(|slate| !slate.is_empty())
    }

    pub fn default_slate(&self) -> &[ItemId] {
        self.slates
            .get(DEFAULT_SLATE_KEY)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.slates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slates.is_empty()
    }
}

/// A request for the top `k` items of one user's slate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationRequest {
    pub user: String,
    /// Always within `1..=MAX_SLATE_LEN`
    pub k: usize,
}

impl RecommendationRequest {
    pub fn new(user: impl Into<String>, k: i64) -> Self {
        Self {
            user: user.into(),
            k: clamp_k(k),
        }
    }
}

/// Clamps a requested count into `1..=MAX_SLATE_LEN`
pub fn clamp_k(k: i64) -> usize {
    k.clamp(1, MAX_SLATE_LEN as i64) as usize
}
