use anyhow::{Context, Result};
use apigateway::{handler::AppRouter, state::AppState};
use dotenv::dotenv;
use mimalloc::MiMalloc;
use shared::{config::Config, utils::Logger};
use tokio_util::sync::CancellationToken;
use tracing::info;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let config = Config::init().context("Failed to load configuration")?;

    let _logger = Logger::new("apigateway", config.is_dev);

    let cancel = CancellationToken::new();

    let state = AppState::new(&config, cancel.clone())
        .await
        .context("Failed to create AppState")?;

    info!("🚀 Server started successfully");

    AppRouter::serve(config.port, state, cancel)
        .await
        .context("Failed to start server")?;

    info!("Shutting down servers...");

    Ok(())
}
