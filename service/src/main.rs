use anyhow::{Context, Result};
use attendance_tracker::backend::{config::AppConfig, create_router, initialize_backend};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;

    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .context("Invalid log level")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let app_state = initialize_backend(&config).context("Failed to initialize backend")?;
    let router = create_router(app_state);

    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!(%addr, data_directory = %config.data_directory.display(), "Attendance tracker listening");

    axum::serve(listener, router).await.context("Server error")?;
    Ok(())
}
