//! Tally API Server
//!
//! Main entry point for the Tally expense service.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use tally_api::{AppState, create_router};
use tally_core::expense::{ExpenseStore, MemoryExpenseStore};
use tally_db::{ExpenseRepository, connect};
use tally_shared::config::{LogFormat, LoggingConfig};
use tally_shared::{AppConfig, JwtConfig, JwtService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;
    init_tracing(&config.logging);

    let timezone = config.dashboard.time_zone()?;
    info!(timezone = %timezone.name(), "Dashboard windows use local calendar days");

    let expenses: Arc<dyn ExpenseStore> = match &config.database {
        Some(database) => {
            let db = connect(database).await?;
            info!("Connected to database");
            Arc::new(ExpenseRepository::new(db))
        }
        None => {
            warn!("No database configured; expenses are kept in memory and lost on restart");
            Arc::new(MemoryExpenseStore::new())
        }
    };

    let jwt_service = JwtService::new(JwtConfig::from(&config.auth));
    let state = AppState::new(expenses, Arc::new(jwt_service), timezone);

    let app = create_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// `RUST_LOG` wins over the configured filter.
fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.filter));

    let (pretty, json) = match logging.format {
        LogFormat::Pretty => (Some(tracing_subscriber::fmt::layer()), None),
        LogFormat::Json => (None, Some(tracing_subscriber::fmt::layer().json())),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(pretty)
        .with(json)
        .init();
}
