//! # Outbound Ports
//!
//! Backing configuration store.

use async_trait::async_trait;
use shared_types::{NetworkId, StoreError};
use std::sync::Arc;

/// Untyped network config payload as returned by the configuration service.
pub type RawNetworkConfig = serde_json::Value;

/// Network configuration store - outbound port.
#[async_trait]
pub trait NetworkConfigStore: Send + Sync {
    /// Load one typed config of a network.
    ///
    /// Returns `Ok(None)` when the network has no config of that type.
    async fn load_network_config(
        &self,
        network_id: &NetworkId,
        config_type: &str,
    ) -> Result<Option<RawNetworkConfig>, StoreError>;
}

#[async_trait]
impl<T: NetworkConfigStore + ?Sized> NetworkConfigStore for Arc<T> {
    async fn load_network_config(
        &self,
        network_id: &NetworkId,
        config_type: &str,
    ) -> Result<Option<RawNetworkConfig>, StoreError> {
        (**self).load_network_config(network_id, config_type).await
    }
}
