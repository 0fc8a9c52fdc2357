//! # Domain Entities
//!
//! Tenants own networks and name the control proxy their gateways use.

use serde::{Deserialize, Serialize};
use shared_types::NetworkId;

/// Tenant record from the tenant store.
///
/// Each network is expected to belong to at most one tenant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tenant {
    /// Tenant ID.
    pub id: i64,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Networks owned by this tenant.
    pub networks: Vec<NetworkId>,
    /// Control proxy address for the tenant's gateways.
    pub control_proxy: String,
}

impl Tenant {
    /// Create a tenant.
    pub fn new(
        id: i64,
        networks: impl IntoIterator<Item = impl Into<NetworkId>>,
        control_proxy: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: String::new(),
            networks: networks.into_iter().map(Into::into).collect(),
            control_proxy: control_proxy.into(),
        }
    }

    /// Set the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Check if this tenant owns `network_id`.
    pub fn owns(&self, network_id: &NetworkId) -> bool {
        self.networks.iter().any(|n| n == network_id)
    }
}
