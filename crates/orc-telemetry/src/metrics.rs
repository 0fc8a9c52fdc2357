//! Prometheus metrics for the orchestrator subsystems.
//!
//! Naming convention: `orc_<subsystem>_<metric>_<unit>`.

use lazy_static::lazy_static;
use prometheus::{
    exponential_buckets, Encoder, Histogram, HistogramOpts, IntCounterVec, Opts, Registry,
    TextEncoder,
};

use crate::TelemetryError;

lazy_static! {
    /// Registry owned by this crate.
    pub static ref REGISTRY: Registry = Registry::new();

    // =========================================================================
    // AUTH CONFIG CACHE (orc-01)
    // =========================================================================

    /// Cache lookups by result.
    pub static ref AUTH_CONFIG_CACHE_LOOKUPS: IntCounterVec = IntCounterVec::new(
        Opts::new("orc_auth_config_cache_lookups_total", "Auth config cache lookups"),
        &["result"]  // hit / miss / stale
    ).expect("metric creation failed");

    /// Backing-store loads by outcome.
    pub static ref AUTH_CONFIG_LOADS: IntCounterVec = IntCounterVec::new(
        Opts::new("orc_auth_config_loads_total", "Auth config loads from the backing store"),
        &["outcome"]  // ok / not_found / invalid_shape / store_error
    ).expect("metric creation failed");

    // =========================================================================
    // REGISTRATION (orc-02)
    // =========================================================================

    /// Register calls by outcome and terminal step.
    pub static ref REGISTRATIONS: IntCounterVec = IntCounterVec::new(
        Opts::new("orc_registration_requests_total", "Gateway registration requests"),
        &["outcome", "step"]
    ).expect("metric creation failed");

    /// End-to-end register latency.
    pub static ref REGISTRATION_DURATION: Histogram = Histogram::with_opts(
        HistogramOpts::new(
            "orc_registration_duration_seconds",
            "Time spent in one register call"
        ).buckets(exponential_buckets(0.001, 2.0, 14).expect("valid buckets"))
    ).expect("metric creation failed");
}

/// Register all metrics with the crate registry.
///
/// Idempotent: collectors already present are skipped.
pub fn register_metrics() -> Result<(), TelemetryError> {
    let metrics: Vec<Box<dyn prometheus::core::Collector>> = vec![
        Box::new(AUTH_CONFIG_CACHE_LOOKUPS.clone()),
        Box::new(AUTH_CONFIG_LOADS.clone()),
        Box::new(REGISTRATIONS.clone()),
        Box::new(REGISTRATION_DURATION.clone()),
    ];

    for metric in metrics {
        match REGISTRY.register(metric) {
            Ok(()) | Err(prometheus::Error::AlreadyReg) => {}
            Err(e) => return Err(TelemetryError::MetricsInit(e.to_string())),
        }
    }
    Ok(())
}

/// Encode all metrics as Prometheus text format.
pub fn gather_metrics() -> Result<String, TelemetryError> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| TelemetryError::MetricsInit(e.to_string()))
}
