//! # Orchestrator Telemetry
//!
//! Logging and metrics shared by the orchestrator subsystems.
//!
//! ## Components
//!
//! - **Logs**: `tracing-subscriber` with an `EnvFilter`, pretty or JSON output
//! - **Metrics**: Prometheus counters and histograms in a crate-owned registry
//! - **Context**: per-request spans carrying a correlation ID
//!
//! ## Usage
//!
//! ```rust,ignore
//! use orc_telemetry::{init_telemetry, TelemetryConfig};
//!
//! let config = TelemetryConfig::from_env();
//! init_telemetry(&config).expect("Failed to init telemetry");
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `OTEL_SERVICE_NAME` | `orchestrator` | Service name in log records |
//! | `ORC_LOG_LEVEL` / `RUST_LOG` | `info` | Log level filter |
//! | `ORC_JSON_LOGS` | `false` (`true` in containers) | JSON formatted logs |
//! | `ORC_CONSOLE_OUTPUT` | `true` | Write logs to stdout |

#![warn(missing_docs)]

mod config;
mod context;
mod logging;
pub mod metrics;

pub use config::TelemetryConfig;
pub use context::{request_span, RequestContext};
pub use logging::init_logging;
pub use metrics::{
    gather_metrics, register_metrics, AUTH_CONFIG_CACHE_LOOKUPS, AUTH_CONFIG_LOADS,
    REGISTRATIONS, REGISTRATION_DURATION,
};

use thiserror::Error;

/// Subsystem tag for the auth-config cache.
pub const SUBSYSTEM_AUTH_CONFIG: &str = "orc-01";

/// Subsystem tag for gateway registration.
pub const SUBSYSTEM_REGISTRATION: &str = "orc-02";

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// Log subscriber could not be installed.
    #[error("Failed to initialize logging: {0}")]
    LoggingInit(String),

    /// Metric registration or encoding failed.
    #[error("Failed to initialize Prometheus metrics: {0}")]
    MetricsInit(String),

    /// Configuration value could not be used.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Install the log subscriber and register all metrics.
///
/// Safe to call once per process; a second call fails with
/// `TelemetryError::LoggingInit` because the global subscriber is already set.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    register_metrics()?;
    init_logging(config)?;

    tracing::info!(
        service = %config.service_name,
        json_logs = config.json_logs,
        "Telemetry initialized"
    );
    Ok(())
}

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
