//! # Config Loader
//!
//! Translates the raw cellular network config into an `AuthConfig`.
//! Performs no caching.

use shared_types::{NetworkId, TimeSource};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::domain::{AuthConfig, AuthConfigError, CellularNetworkConfig};
use crate::ports::NetworkConfigStore;

/// Fetches and validates one network's auth config.
pub struct ConfigLoader<S: NetworkConfigStore> {
    store: S,
    time: Arc<dyn TimeSource>,
    config_type: String,
}

impl<S: NetworkConfigStore> ConfigLoader<S> {
    /// Create a loader reading `config_type` from `store`.
    pub fn new(store: S, time: Arc<dyn TimeSource>, config_type: impl Into<String>) -> Self {
        Self {
            store,
            time,
            config_type: config_type.into(),
        }
    }

    /// Config type this loader reads.
    pub fn config_type(&self) -> &str {
        &self.config_type
    }

    /// Load the auth config of `network_id`, stamping `last_update = now`.
    pub async fn load(&self, network_id: &NetworkId) -> Result<AuthConfig, AuthConfigError> {
        let now = self.time.now();

        let raw = self
            .store
            .load_network_config(network_id, &self.config_type)
            .await?;

        let raw = match raw {
            Some(value) if !value.is_null() => value,
            _ => {
                debug!("[orc-01] No {} config for network {}", self.config_type, network_id);
                return Err(AuthConfigError::NotFound {
                    network_id: network_id.clone(),
                });
            }
        };

        let cellular: CellularNetworkConfig = serde_json::from_value(raw).map_err(|e| {
            warn!(
                "[orc-01] Malformed {} config for network {}: {}",
                self.config_type, network_id, e
            );
            AuthConfigError::InvalidShape {
                network_id: network_id.clone(),
                reason: e.to_string(),
            }
        })?;

        Ok(AuthConfig::from_epc(cellular.epc, now))
    }
}
