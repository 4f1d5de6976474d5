use clap::Parser;
use tibasasa_core::RiskScorer;
use tibasasa_server::{AppState, ServerConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::parse();

    // A missing or invalid model only disables prediction
    let scorer = RiskScorer::load(&config.model_path);
    if !scorer.is_available() {
        tracing::warn!("⚠ Readmission risk prediction is unavailable because the model could not be loaded");
    }

    let app = tibasasa_server::app(AppState::new(scorer));

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    tracing::info!("🚀 TibaSasa server running on http://{}", config.bind);

    axum::serve(listener, app).await?;

    Ok(())
}
