//! # Control Proxy Resolvers
//!
//! `TenantScanResolver` fetches the full tenant list on every call and scans
//! it. `SnapshotResolver` answers from an index over a tenant list captured
//! once; it never sees tenants created afterwards.

use async_trait::async_trait;
use shared_types::NetworkId;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::algorithms::{find_control_proxy, TenantIndex};
use crate::domain::{RegistrationError, Tenant};
use crate::ports::{ControlProxyResolver, TenantStore};

/// Resolver scanning a freshly listed tenant set per call.
pub struct TenantScanResolver<T: TenantStore> {
    tenants: Arc<T>,
}

impl<T: TenantStore> TenantScanResolver<T> {
    /// Create a resolver over `tenants`.
    pub fn new(tenants: Arc<T>) -> Self {
        Self { tenants }
    }
}

#[async_trait]
impl<T: TenantStore + 'static> ControlProxyResolver for TenantScanResolver<T> {
    async fn resolve(&self, network_id: &NetworkId) -> Result<String, RegistrationError> {
        let tenants = self.tenants.list_all_tenants().await?;

        match find_control_proxy(&tenants, network_id) {
            Some(tenant) => {
                debug!(
                    "[orc-02] Network {} owned by tenant {}, control proxy {}",
                    network_id, tenant.id, tenant.control_proxy
                );
                Ok(tenant.control_proxy.clone())
            }
            None => {
                warn!(
                    "[orc-02] No tenant owns network {} ({} tenants scanned)",
                    network_id,
                    tenants.len()
                );
                Err(RegistrationError::NotFound {
                    network_id: network_id.clone(),
                })
            }
        }
    }
}

/// Resolver over a fixed, indexed tenant snapshot.
pub struct SnapshotResolver {
    index: TenantIndex,
}

impl SnapshotResolver {
    /// Index `tenants`.
    pub fn from_tenants(tenants: Vec<Tenant>) -> Self {
        let index = TenantIndex::build(tenants);
        for network in index.conflicting_networks() {
            warn!("[orc-02] Network {} claimed by several tenants, first owner wins", network);
        }
        Self { index }
    }

    /// Capture and index the current tenant list of `store`.
    pub async fn load<T: TenantStore + ?Sized>(store: &T) -> Result<Self, RegistrationError> {
        let tenants = store.list_all_tenants().await?;
        Ok(Self::from_tenants(tenants))
    }

    /// Number of networks the snapshot can resolve.
    pub fn network_count(&self) -> usize {
        self.index.network_count()
    }
}

#[async_trait]
impl ControlProxyResolver for SnapshotResolver {
    async fn resolve(&self, network_id: &NetworkId) -> Result<String, RegistrationError> {
        self.index
            .lookup(network_id)
            .map(|tenant| tenant.control_proxy.clone())
            .ok_or_else(|| RegistrationError::NotFound {
                network_id: network_id.clone(),
            })
    }
}
