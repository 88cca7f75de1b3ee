mod bootstrap;
mod bridge;
mod health;
mod http;
mod rooms;

use std::time::Duration;

use anyhow::Result;
use siza_core::config::{AppConfig, LoadOptions};

fn init_logging(config: &AppConfig) {
    use siza_core::config::LogFormat::*;
    use tracing::Level;

    let log_level = config.logging.level.parse::<Level>().unwrap_or(Level::INFO);

    match config.logging.format {
        Compact => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).compact().init();
        }
        Pretty => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).pretty().init();
        }
        Json => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).json().init();
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    run().await
}

pub async fn run() -> Result<()> {
    let config = AppConfig::load(LoadOptions::default())?;
    init_logging(&config);

    let app = bootstrap::bootstrap_with_config(config)?;
    let state = http::AppState::from(&app);

    let server_config = &app.config.server;
    let server = http::spawn(&server_config.bind_address, server_config.port, state).await?;

    tracing::info!(
        event_name = "system.server.started",
        correlation_id = "bootstrap",
        agent_name = %app.agent.name(),
        platform_url = %app.config.platform.url,
        "siza worker accepting room jobs"
    );
    wait_for_shutdown().await?;
    tracing::info!(
        event_name = "system.server.stopping",
        correlation_id = "shutdown",
        grace_secs = app.config.server.graceful_shutdown_secs,
        "siza worker stopping"
    );
    let grace = Duration::from_secs(app.config.server.graceful_shutdown_secs);
    if server.shutdown(grace).await {
        tracing::info!(
            event_name = "system.server.stopped",
            correlation_id = "shutdown",
            "siza worker stopped"
        );
    }

    Ok(())
}

async fn wait_for_shutdown() -> Result<()> {
    tokio::signal::ctrl_c().await?;
    Ok(())
}
