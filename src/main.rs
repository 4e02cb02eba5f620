use std::sync::Arc;

use recbot::{
    bot::{create_router, BotState, HttpConnector},
    config::BotConfig,
    services::{HttpRecommenderClient, RecBot},
    telemetry,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = BotConfig::from_env()?;
    telemetry::init_tracing();

    let recommender = HttpRecommenderClient::new(
        config.recommender_api_url.clone(),
        config.recommender_timeout(),
    )?;
    let state = BotState::new(
        RecBot::new(Arc::new(recommender)),
        Arc::new(HttpConnector::new()?),
    );

    let app = create_router(state);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(
        address = %address,
        recommender = %config.recommender_api_url,
        credentials_configured = config.has_credentials(),
        "Bot listening"
    );
    axum::serve(listener, app).await?;

    Ok(())
}
