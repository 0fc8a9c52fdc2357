//! # Inbound Ports
//!
//! API offered to collaborators that need a network's auth parameters.

use async_trait::async_trait;
use shared_types::NetworkId;
use std::sync::Arc;

use crate::domain::{AuthConfig, AuthConfigError};

/// Auth config API - inbound port.
#[async_trait]
pub trait AuthConfigApi: Send + Sync {
    /// Get the auth config of a network, served from cache while fresh.
    ///
    /// # Errors
    /// - `NotFound` if the backing store has no config for the network
    /// - `InvalidShape` if the stored payload is not an auth config
    /// - `Store` for transport failures, unchanged
    async fn get_config(&self, network_id: &NetworkId) -> Result<Arc<AuthConfig>, AuthConfigError>;
}
