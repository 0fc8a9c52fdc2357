//! # Config Cache Service
//!
//! Per-network, TTL-gated memoization of `ConfigLoader`.
//!
//! The cache is owned by the service instance that wires it up and is
//! dropped with it; there is no process-wide instance.
//!
//! Racing misses for the same network each fetch independently and the
//! last completed store wins, even if it carries the older snapshot.

use async_trait::async_trait;
use orc_telemetry::{AUTH_CONFIG_CACHE_LOOKUPS, AUTH_CONFIG_LOADS};
use parking_lot::RwLock;
use shared_types::{NetworkId, TimeSource};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, Instrument};

use crate::application::loader::ConfigLoader;
use crate::config::AuthConfigCacheConfig;
use crate::domain::{is_fresh, AuthConfig, AuthConfigError};
use crate::ports::{AuthConfigApi, NetworkConfigStore};

/// TTL cache in front of `ConfigLoader`.
pub struct ConfigCache<S: NetworkConfigStore> {
    /// Loader invoked on miss or staleness.
    loader: ConfigLoader<S>,
    /// Clock used for freshness checks.
    time: Arc<dyn TimeSource>,
    /// Freshness window.
    ttl: Duration,
    /// At most one snapshot per network.
    configs: RwLock<HashMap<NetworkId, Arc<AuthConfig>>>,
}

impl<S: NetworkConfigStore> ConfigCache<S> {
    /// Create a cache over `store`.
    pub fn new(config: AuthConfigCacheConfig, store: S, time: Arc<dyn TimeSource>) -> Self {
        let ttl = config.ttl();
        let loader = ConfigLoader::new(store, Arc::clone(&time), config.config_type);
        Self {
            loader,
            time,
            ttl,
            configs: RwLock::new(HashMap::new()),
        }
    }

    /// Configured TTL.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Number of cached entries, fresh or stale.
    pub fn len(&self) -> usize {
        self.configs.read().len()
    }

    /// Check if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.configs.read().is_empty()
    }

    /// Drop the entry of one network; the next read reloads it.
    pub fn invalidate(&self, network_id: &NetworkId) -> bool {
        self.configs.write().remove(network_id).is_some()
    }

    /// Drop every entry.
    pub fn clear(&self) {
        self.configs.write().clear();
    }

    /// Return the auth config of `network_id`.
    ///
    /// Shared lock for lookup, no lock while loading, exclusive lock to store.
    pub async fn get_config(
        &self,
        network_id: &NetworkId,
    ) -> Result<Arc<AuthConfig>, AuthConfigError> {
        let now = self.time.now();

        let cached = self.configs.read().get(network_id).cloned();
        match cached {
            Some(cfg) if is_fresh(&cfg, now, self.ttl) => {
                AUTH_CONFIG_CACHE_LOOKUPS.with_label_values(&["hit"]).inc();
                debug!("[orc-01] Cache hit for network {}", network_id);
                return Ok(cfg);
            }
            Some(_) => {
                AUTH_CONFIG_CACHE_LOOKUPS.with_label_values(&["stale"]).inc();
                debug!("[orc-01] Cached config for network {} is stale", network_id);
            }
            None => {
                AUTH_CONFIG_CACHE_LOOKUPS.with_label_values(&["miss"]).inc();
                debug!("[orc-01] Cache miss for network {}", network_id);
            }
        }

        let loaded = match self.loader.load(network_id).await {
            Ok(cfg) => Arc::new(cfg),
            Err(e) => {
                AUTH_CONFIG_LOADS.with_label_values(&[e.kind()]).inc();
                return Err(e);
            }
        };
        AUTH_CONFIG_LOADS.with_label_values(&["ok"]).inc();

        self.configs
            .write()
            .insert(network_id.clone(), Arc::clone(&loaded));

        info!(
            "[orc-01] Refreshed auth config for network {} ({} profiles)",
            network_id,
            loaded.sub_profiles.len()
        );
        Ok(loaded)
    }
}

#[async_trait]
impl<S: NetworkConfigStore + 'static> AuthConfigApi for ConfigCache<S> {
    async fn get_config(&self, network_id: &NetworkId) -> Result<Arc<AuthConfig>, AuthConfigError> {
        let span = orc_telemetry::request_span(orc_telemetry::SUBSYSTEM_AUTH_CONFIG, "get_config");
        ConfigCache::get_config(self, network_id).instrument(span).await
    }
}
