use std::time::Duration;

use axum::{http::StatusCode, routing::get, Json, Router};
use serde_json::json;

use recbot::api::{create_router, AppState};
use recbot::models::{RecommendationMapping, DEFAULT_SLATE_KEY};
use recbot::services::fallback::recommend_with_fallback;
use recbot::services::providers::{FetchFailure, HttpRecommenderClient, RecommenderClient};

/// Serves `app` on an ephemeral port and returns its `/recommend` URL
async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}/recommend", address)
}

fn client(url: String, timeout: Duration) -> HttpRecommenderClient {
    HttpRecommenderClient::new(url, timeout).unwrap()
}

fn recommender_app() -> Router {
    let mut mapping = RecommendationMapping::default();
    mapping.insert("1", vec![102, 104, 105, 106, 107]);
    mapping.insert(DEFAULT_SLATE_KEY, vec![101, 102, 103, 104, 105, 106, 107]);
    create_router(AppState::new(mapping))
}

#[tokio::test]
async fn test_fetches_prefix_from_recommender_service() {
    let url = spawn(recommender_app()).await;
    let client = client(url, Duration::from_secs(3));

    let items = client.fetch_slate("1", 3).await.unwrap();
    assert_eq!(items, vec![102, 104, 105]);

    let items = recommend_with_fallback(&client, "42", 7).await;
    assert_eq!(items, vec![101, 102, 103, 104, 105, 106, 107]);
}

#[tokio::test]
async fn test_accepts_items_object() {
    let app = Router::new().route(
        "/recommend",
        get(|| async { Json(json!({"items": ["201", 202, 203, 204]})) }),
    );
    let url = spawn(app).await;

    let items = recommend_with_fallback(&client(url, Duration::from_secs(3)), "1", 2).await;
    assert_eq!(items, vec![201, 202]);
}

#[tokio::test]
async fn test_truncates_backend_that_ignores_k() {
    let app = Router::new().route(
        "/recommend",
        get(|| async { Json(json!([1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12])) }),
    );
    let url = spawn(app).await;

    let items = recommend_with_fallback(&client(url, Duration::from_secs(3)), "1", 4).await;
    assert_eq!(items, vec![1, 2, 3, 4]);
}

#[tokio::test]
async fn test_unreachable_backend_falls_back() {
    // bind then drop so the port is closed
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);

    let client = client(format!("http://{}/recommend", address), Duration::from_secs(3));
    assert!(matches!(
        client.fetch_slate("1", 3).await,
        Err(FetchFailure::Transport(_))
    ));

    for k in 1..=10 {
        let items = recommend_with_fallback(&client, "1", k).await;
        let expected: Vec<i64> = (101..101 + k as i64).collect();
        assert_eq!(items, expected);
    }
}

#[tokio::test]
async fn test_slow_backend_times_out_and_falls_back() {
    let app = Router::new().route(
        "/recommend",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!([1, 2, 3]))
        }),
    );
    let url = spawn(app).await;
    let client = client(url, Duration::from_millis(200));

    assert_eq!(client.fetch_slate("1", 3).await, Err(FetchFailure::Timeout));
    assert_eq!(recommend_with_fallback(&client, "1", 3).await, vec![101, 102, 103]);
}

#[tokio::test]
async fn test_error_status_falls_back() {
    let app = Router::new().route(
        "/recommend",
        get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "busy") }),
    );
    let url = spawn(app).await;
    let client = client(url, Duration::from_secs(3));

    assert_eq!(client.fetch_slate("1", 2).await, Err(FetchFailure::Status(503)));
    assert_eq!(recommend_with_fallback(&client, "1", 2).await, vec![101, 102]);
}

#[tokio::test]
async fn test_empty_and_malformed_bodies_fall_back() {
    let app = Router::new()
        .route("/recommend", get(|| async { Json(json!([])) }))
        .route("/broken", get(|| async { "not json" }));
    let url = spawn(app).await;

    let empty = client(url.clone(), Duration::from_secs(3));
    assert_eq!(empty.fetch_slate("1", 5).await, Err(FetchFailure::Empty));
    assert_eq!(recommend_with_fallback(&empty, "1", 5).await, vec![101, 102, 103, 104, 105]);

    let broken = client(url.replace("/recommend", "/broken"), Duration::from_secs(3));
    assert!(matches!(
        broken.fetch_slate("1", 5).await,
        Err(FetchFailure::Malformed(_))
    ));
    assert_eq!(recommend_with_fallback(&broken, "1", 1).await, vec![101]);
}
