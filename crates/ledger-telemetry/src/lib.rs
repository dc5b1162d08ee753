//! # Ledger Telemetry
//!
//! Structured logging and Prometheus metrics for the document ledger.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ledger_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     init_telemetry(&TelemetryConfig::from_env())?;
//!     // Logs and metrics are now being collected
//!     Ok(())
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `DL_SERVICE_NAME` | `document-ledger` | Service name in log lines |
//! | `DL_LOG_LEVEL` / `RUST_LOG` | `info` | `EnvFilter` directive |
//! | `DL_JSON_LOGS` | `false` (`true` in containers) | JSON log lines |

#![warn(missing_docs)]

mod config;
mod logging;
pub mod metrics;

pub use config::TelemetryConfig;
pub use logging::init_logging;
pub use metrics::{
    gather_metrics, register_metrics, BLOCKS_SEALED, CERTIFICATES_ISSUED, CHAIN_HEIGHT,
    CHAIN_VALIDATIONS, INTEGRITY_VIOLATIONS, MINING_DURATION, POOL_PENDING, REVIEW_DECISIONS,
    SUBSYSTEM_ERRORS, TRANSACTIONS_SUBMITTED, VERIFICATIONS,
};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// Subscriber could not be installed
    #[error("Failed to initialize logging: {0}")]
    LoggingInit(String),

    /// Metric registration or encoding failed
    #[error("Failed to initialize Prometheus metrics: {0}")]
    MetricsInit(String),

    /// Bad configuration value
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Register metrics, then install the log subscriber.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    register_metrics()?;
    init_logging(config)
}
