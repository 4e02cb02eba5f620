use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

/// Chat bot configuration loaded from unprefixed environment variables
///
/// envy lowercases variable names, so `MicrosoftAppId` arrives as
/// `microsoftappid`.
#[derive(Debug, Deserialize, Clone)]
pub struct BotConfig {
    /// Bot Framework application id
    #[serde(rename = "microsoftappid", default)]
    pub app_id: String,

    /// Bot Framework application password
    #[serde(rename = "microsoftapppassword", default)]
    pub app_password: String,

    /// Server host address
    #[serde(default = "default_bot_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_bot_port")]
    pub port: u16,

    /// Full URL of the recommender's `/recommend` endpoint
    #[serde(default = "default_recommender_api_url")]
    pub recommender_api_url: String,

    /// Total time budget for one recommender call, in milliseconds
    #[serde(default = "default_recommender_timeout_ms")]
    pub recommender_timeout_ms: u64,
}

/// Recommendation service configuration (`RECOMMENDER_` prefix)
#[derive(Debug, Deserialize, Clone)]
pub struct RecommenderConfig {
    #[serde(default = "default_recommender_host")]
    pub host: String,

    #[serde(default = "default_recommender_port")]
    pub port: u16,

    /// Slate mapping written by `build-slates`
    #[serde(default = "default_recs_path")]
    pub recs_path: PathBuf,
}

/// Slate builder configuration (`SLATES_` prefix)
#[derive(Debug, Deserialize, Clone)]
pub struct SlateBuilderConfig {
    #[serde(default = "default_recs_path")]
    pub output_path: PathBuf,

    /// Optional JSON file with `history` and `popular` tables
    #[serde(default)]
    pub input_path: Option<PathBuf>,
}

fn default_bot_host() -> String {
    "0.0.0.0".to_string()
}

fn default_bot_port() -> u16 {
    3978
}

fn default_recommender_api_url() -> String {
    "http://127.0.0.1:8000/recommend".to_string()
}

fn default_recommender_timeout_ms() -> u64 {
    3000
}

fn default_recommender_host() -> String {
    "127.0.0.1".to_string()
}

fn default_recommender_port() -> u16 {
    8000
}

fn default_recs_path() -> PathBuf {
    PathBuf::from("data/recs.json")
}

impl BotConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<BotConfig>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    pub fn recommender_timeout(&self) -> Duration {
        Duration::from_millis(self.recommender_timeout_ms)
    }

    /// Whether channel credentials were supplied
    pub fn has_credentials(&self) -> bool {
        !self.app_id.is_empty() && !self.app_password.is_empty()
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl RecommenderConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::prefixed("RECOMMENDER_")
            .from_env::<RecommenderConfig>()
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl SlateBuilderConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::prefixed("SLATES_")
            .from_env::<SlateBuilderConfig>()
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}
