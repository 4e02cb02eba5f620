/// Recommendation backend abstraction
///
/// The bot only needs "give me up to k items for this user". The HTTP client
/// talking to the recommender service is the production implementation; tests
/// substitute a mock.
use crate::models::ItemId;

pub mod http;

pub use http::{parse_items, HttpRecommenderClient};

/// Why a backend call produced nothing usable
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchFailure {
    #[error("recommender timed out")]
    Timeout,

    #[error("recommender unreachable: {0}")]
    Transport(String),

    #[error("recommender returned status {0}")]
    Status(u16),

    #[error("malformed recommender response: {0}")]
    Malformed(String),

    #[error("recommender returned no items")]
    Empty,
}

impl From<reqwest::Error> for FetchFailure {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            FetchFailure::Timeout
        } else if error.is_decode() {
            FetchFailure::Malformed(error.to_string())
        } else {
            FetchFailure::Transport(error.to_string())
        }
    }
}

/// Trait for recommendation backends
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RecommenderClient: Send + Sync {
    /// Fetch at most `k` item ids for `user_id`
    ///
    /// An empty list is reported as `FetchFailure::Empty`, never as `Ok`.
    async fn fetch_slate(&self, user_id: &str, k: usize) -> Result<Vec<ItemId>, FetchFailure>;

    /// Backend name for logging and help text
    fn endpoint(&self) -> String;
}
