/// HTTP client for the recommender service's `GET /recommend` endpoint
///
/// Accepts either a bare JSON array or an object with an `items` array.
/// Entries are coerced to integers the lenient way: integers pass through,
/// floats are truncated and numeric strings are parsed.
use std::time::Duration;

use reqwest::{Client as HttpClient, StatusCode};
use serde_json::Value;

use crate::{
    error::AppResult,
    models::ItemId,
    services::providers::{FetchFailure, RecommenderClient},
};

#[derive(Clone)]
pub struct HttpRecommenderClient {
    http_client: HttpClient,
    api_url: String,
}

impl HttpRecommenderClient {
    /// Creates a client whose every call is bounded by `timeout` end to end
    pub fn new(api_url: String, timeout: Duration) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            api_url,
        })
    }
}

#[async_trait::async_trait]
impl RecommenderClient for HttpRecommenderClient {
    async fn fetch_slate(&self, user_id: &str, k: usize) -> Result<Vec<ItemId>, FetchFailure> {
        let response = self
            .http_client
            .get(&self.api_url)
            .query(&[("user", user_id.to_string()), ("k", k.to_string())])
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(FetchFailure::Status(response.status().as_u16()));
        }

        let body: Value = response.json().await?;
        let items = parse_items(body, k)?;

        tracing::debug!(
            user_id = %user_id,
            k = k,
            items = items.len(),
            "Recommender responded"
        );

        Ok(items)
    }

    fn endpoint(&self) -> String {
        self.api_url.clone()
    }
}

/// Extracts up to `k` item ids from a recommender response body
pub fn parse_items(body: Value, k: usize) -> Result<Vec<ItemId>, FetchFailure> {
    let entries = match body {
        Value::Array(entries) => entries,
        Value::Object(mut object) => match object.remove("items") {
            Some(Value::Array(entries)) => entries,
            _ => {
                return Err(FetchFailure::Malformed(
                    "object without an `items` list".to_string(),
                ))
            }
        },
        other => {
            return Err(FetchFailure::Malformed(format!(
                "expected a list, got {}",
                other
            )))
        }
    };

    let items = entries
        .iter()
        .map(coerce_item)
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .take(k)
        .collect::<Vec<_>>();

    if items.is_empty() {
        return Err(FetchFailure::Empty);
    }

    Ok(items)
}

fn coerce_item(value: &Value) -> Result<ItemId, FetchFailure> {
    let malformed = || FetchFailure::Malformed(format!("not an item id: {}", value));

    match value {
        Value::Number(number) => {
            if let Some(id) = number.as_i64() {
                return Ok(id);
            }
            match number.as_f64() {
                Some(f) if f.is_finite() && f.abs() < i64::MAX as f64 => Ok(f.trunc() as i64),
                _ => Err(malformed()),
            }
        }
        Value::String(s) => s.trim().parse::<ItemId>().map_err(|_| malformed()),
        _ => Err(malformed()),
    }
}
