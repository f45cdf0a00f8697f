use anyhow::Result;
use routecast::api::AppState;
use routecast::config::RouteCastConfig;
use routecast::web;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = RouteCastConfig::from_env()?;
    let state = AppState::new(&config)?;

    tracing::info!("Starting server...");
    web::run(state, config.port).await;
    Ok(())
}
