//! Fleetline service binary.
//!
//! Wires the position-simulation engine to the observer HTTP layer. Loads
//! configuration, constructs the engine from the built-in fleet, and
//! serves the tracker feed until the process is terminated.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load configuration from `fleetline.yaml` (defaults if absent)
//! 3. Construct the simulation engine from the built-in catalog and fleet
//! 4. Run the observer HTTP server

mod config;
mod error;

use std::path::Path;
use std::sync::Arc;

use fleetline_observer::{AppState, start_server};
use fleetline_sim::create_starting_engine;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::EngineConfig;
use crate::error::EngineError;

/// Path of the configuration file, relative to the working directory.
const CONFIG_PATH: &str = "fleetline.yaml";

/// Application entry point for the Fleetline service.
///
/// # Errors
///
/// Returns an error if configuration parsing, engine construction, or the
/// HTTP server fails; all are fatal at startup.
#[tokio::main]
async fn main() -> Result<(), EngineError> {
    // 1. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("fleetline-engine starting");

    // 2. Load configuration.
    let config = load_config()?;
    info!(
        host = %config.server.host,
        port = config.server.port,
        "Configuration loaded"
    );
    if config.auth.api_token == "change-me" {
        warn!("auth.api_token is still the default; set FLEETLINE_API_TOKEN");
    }

    // 3. Construct the engine. The catalog and fleet are validated here;
    //    a misconfigured definition refuses to start the service.
    let engine = Arc::new(create_starting_engine()?);
    info!(
        vehicle_count = engine.vehicle_count(),
        route_count = engine.route_count(),
        "Simulation engine constructed"
    );

    // 4. Run the observer server until termination.
    let state = Arc::new(AppState::new(
        Arc::clone(&engine),
        config.auth.api_token.clone(),
    ));
    start_server(&config.server.host, config.server.port, state).await?;

    Ok(())
}

/// Load `fleetline.yaml`, falling back to built-in defaults (plus
/// environment overrides) when the file does not exist. A present but
/// unparseable file is fatal.
fn load_config() -> Result<EngineConfig, EngineError> {
    let path = Path::new(CONFIG_PATH);
    if path.exists() {
        Ok(EngineConfig::from_file(path)?)
    } else {
        warn!(path = CONFIG_PATH, "config file not found, using defaults");
        let mut config = EngineConfig::default();
        config.apply_env_overrides();
        Ok(config)
    }
}
