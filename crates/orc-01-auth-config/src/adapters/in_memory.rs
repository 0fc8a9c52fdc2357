//! In-Memory Network Config Store
//!
//! Implements `NetworkConfigStore` over a map, for local wiring and tests.
//! Counts loads and can inject failures or latency.

use async_trait::async_trait;
use parking_lot::RwLock;
use shared_types::{NetworkId, StoreError};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tracing::debug;

use crate::domain::CELLULAR_NETWORK_CONFIG_TYPE;
use crate::ports::{NetworkConfigStore, RawNetworkConfig};

/// Map-backed configuration store.
#[derive(Default)]
pub struct InMemoryNetworkConfigStore {
    /// Configs keyed by (network, config type).
    configs: RwLock<HashMap<(NetworkId, String), RawNetworkConfig>>,
    /// Number of `load_network_config` calls served.
    load_calls: AtomicUsize,
    /// Error returned by every load while set.
    failure: RwLock<Option<StoreError>>,
    /// Artificial latency per load.
    latency: RwLock<Option<Duration>>,
}

impl InMemoryNetworkConfigStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a config.
    pub fn put(
        &self,
        network_id: impl Into<NetworkId>,
        config_type: &str,
        config: RawNetworkConfig,
    ) {
        self.configs
            .write()
            .insert((network_id.into(), config_type.to_string()), config);
    }

    /// Insert or replace the cellular network config of a network.
    pub fn put_cellular(&self, network_id: impl Into<NetworkId>, config: RawNetworkConfig) {
        self.put(network_id, CELLULAR_NETWORK_CONFIG_TYPE, config);
    }

    /// Remove a config.
    pub fn remove(&self, network_id: &NetworkId, config_type: &str) -> Option<RawNetworkConfig> {
        self.configs
            .write()
            .remove(&(network_id.clone(), config_type.to_string()))
    }

    /// Make every subsequent load fail with `failure` (or succeed again with `None`).
    pub fn fail_with(&self, failure: Option<StoreError>) {
        *self.failure.write() = failure;
    }

    /// Delay every subsequent load by `latency`.
    pub fn set_latency(&self, latency: Option<Duration>) {
        *self.latency.write() = latency;
    }

    /// Number of loads served so far.
    pub fn load_calls(&self) -> usize {
        self.load_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl NetworkConfigStore for InMemoryNetworkConfigStore {
    async fn load_network_config(
        &self,
        network_id: &NetworkId,
        config_type: &str,
    ) -> Result<Option<RawNetworkConfig>, StoreError> {
        self.load_calls.fetch_add(1, Ordering::SeqCst);
        debug!("[orc-01] Loading {} config for network {}", config_type, network_id);

        let latency = *self.latency.read();
        if let Some(latency) = latency {
            tokio::time::sleep(latency).await;
        }

        if let Some(failure) = self.failure.read().clone() {
            return Err(failure);
        }

        Ok(self
            .configs
            .read()
            .get(&(network_id.clone(), config_type.to_string()))
            .cloned())
    }
}
