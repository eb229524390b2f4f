//! HTTP server for the employment credit engine.
//!
//! Environment:
//! - `CREDIT_ENGINE_CONFIG_DIR`: rate configuration directory (default `./config/default`)
//! - `CREDIT_ENGINE_ADDR`: listen address (default `127.0.0.1:3000`)
//! - `RUST_LOG`: log filter (default `info`)

use std::net::SocketAddr;

use employment_credit::api::{AppState, create_router};
use employment_credit::config::ConfigLoader;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_DIR: &str = "./config/default";
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

type BoxError = Box<dyn std::error::Error + Send + Sync>;

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(env_filter).try_init();
}

async fn run() -> Result<(), BoxError> {
    init_tracing();

    let config_dir =
        std::env::var("CREDIT_ENGINE_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let addr: SocketAddr = std::env::var("CREDIT_ENGINE_ADDR")
        .unwrap_or_else(|_| DEFAULT_ADDR.to_string())
        .parse()?;

    let config = ConfigLoader::load(&config_dir)?;
    info!(
        config_dir = %config_dir,
        scheme = %config.schedule().code,
        schedules = config.config().rates().len(),
        "Loaded rate configuration"
    );

    let app = create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "employment-credit listening");

    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        tracing::error!(error = %err, "employment-credit failed");
        std::process::exit(1);
    }
}
