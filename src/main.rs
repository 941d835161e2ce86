use std::sync::Arc;

use axum::routing::get;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use order_of_secrets::{
    config::AppConfig, routes, services::completion::OpenAiClient, state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env()?;
    if config.api_key.is_none() {
        warn!("OPENAI_API_KEY is not set; trivial and mystic replies will return errors");
    }

    let completion = OpenAiClient::new(&config)?;
    let state = Arc::new(AppState::new(Arc::new(completion)));

    let app = routes::create_router()
        .route("/", get(|| async { "THE ORDER IS LISTENING" }))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;

    info!(model = %config.model, "Order of Secrets API running at http://{}", config.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
