//! # Auth Config Cache Configuration

use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

use crate::domain::{CELLULAR_NETWORK_CONFIG_TYPE, DEFAULT_CONFIG_TTL_SECS};

/// Configuration for `ConfigCache` and `ConfigLoader`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthConfigCacheConfig {
    /// Freshness window of a cached entry, in seconds.
    pub ttl_secs: u64,

    /// Network config type holding the `epc` section.
    pub config_type: String,
}

impl Default for AuthConfigCacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: DEFAULT_CONFIG_TTL_SECS,
            config_type: CELLULAR_NETWORK_CONFIG_TYPE.to_string(),
        }
    }
}

impl AuthConfigCacheConfig {
    /// Create a config for testing (short TTL).
    pub fn for_testing() -> Self {
        Self {
            ttl_secs: 5,
            ..Self::default()
        }
    }

    /// Read overrides from the environment.
    ///
    /// - `ORC_AUTH_CONFIG_TTL_SECS`: TTL in seconds (default: 600)
    /// - `ORC_AUTH_CONFIG_TYPE`: config type (default: cellular_network)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            ttl_secs: env::var("ORC_AUTH_CONFIG_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.ttl_secs),
            config_type: env::var("ORC_AUTH_CONFIG_TYPE").unwrap_or(defaults.config_type),
        }
    }

    /// TTL as a `Duration`.
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}
