//! Binary entry point for the payroll engine HTTP server.

use std::env;

use tracing::info;
use tracing_subscriber::EnvFilter;

use zarada_engine::api::{AppState, create_router};
use zarada_engine::config::RateLoader;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_dir = env::var("ZARADA_CONFIG_DIR").unwrap_or_else(|_| "./config/rs".to_string());
    let bind_addr = env::var("ZARADA_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

    let rates = RateLoader::load(&config_dir)?;
    info!(
        config_dir = %config_dir,
        tables = rates.configs().len(),
        "Rate tables loaded"
    );

    let router = create_router(AppState::new(rates));
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!(addr = %bind_addr, "Payroll engine listening");

    axum::serve(listener, router).await?;
    Ok(())
}
