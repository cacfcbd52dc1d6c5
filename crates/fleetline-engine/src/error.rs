//! Top-level error type for the Fleetline service binary.

use crate::config::ConfigError;

/// Errors that abort service startup.
///
/// Every variant is fatal: the service refuses to start rather than run
/// with invalid configuration or a misconfigured fleet.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration could not be loaded or parsed.
    #[error("config error: {source}")]
    Config {
        /// The underlying configuration error.
        #[from]
        source: ConfigError,
    },

    /// The built-in fleet or catalog failed validation.
    #[error("simulation error: {source}")]
    Sim {
        /// The underlying simulation construction error.
        #[from]
        source: fleetline_sim::SimError,
    },

    /// The observer HTTP server failed to bind or serve.
    #[error("server error: {source}")]
    Server {
        /// The underlying server error.
        #[from]
        source: fleetline_observer::ServerError,
    },
}
