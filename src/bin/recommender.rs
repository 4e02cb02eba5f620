use recbot::{
    api::{create_router, AppState},
    config::RecommenderConfig,
    services::recommender,
    telemetry,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = RecommenderConfig::from_env()?;
    telemetry::init_tracing();

    let mapping = recommender::load_mapping(&config.recs_path)?;
    let app = create_router(AppState::new(mapping));

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(address = %address, "Recommender listening");
    axum::serve(listener, app).await?;

    Ok(())
}
