//! HTTP server for the domestic payroll engine.

use std::process::ExitCode;

use domestic_payroll::api::{AppState, create_router};
use domestic_payroll::config::{ConfigLoader, RateTable};
use tracing::{error, info};

/// Environment variable naming a YAML rate table to load instead of the defaults.
const RATES_ENV: &str = "PAYROLL_RATES";
/// Environment variable holding the address to listen on.
const ADDR_ENV: &str = "PAYROLL_ADDR";
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() -> ExitCode {
    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(log_filter)
        .with_target(false)
        .init();

    let config = match std::env::var(RATES_ENV) {
        Ok(path) => {
            info!(path = %path, "Loading rate table");
            ConfigLoader::load(&path)
        }
        Err(_) => ConfigLoader::from_table(RateTable::default()),
    };
    let config = match config {
        Ok(config) => config,
        Err(err) => {
            error!(error = %err, "Failed to load rate table");
            return ExitCode::FAILURE;
        }
    };
    info!(
        year = config.rates().year,
        minimum_wage = %config.rates().minimum_wage,
        "Using rate table"
    );

    let addr = std::env::var(ADDR_ENV).unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            error!(addr = %addr, error = %err, "Failed to bind");
            return ExitCode::FAILURE;
        }
    };
    info!(addr = %addr, "Listening");

    let app = create_router(AppState::new(config));
    if let Err(err) = axum::serve(listener, app).await {
        error!(error = %err, "Server error");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
