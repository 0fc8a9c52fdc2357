//! Control proxy lookup over a tenant list.
//!
//! `find_control_proxy` is the linear scan: O(tenants × networks per tenant)
//! per call, fine while both counts stay small. `TenantIndex` precomputes a
//! network -> tenant map from the same list with identical first-match
//! semantics, for callers resolving many networks against one snapshot.

use shared_types::NetworkId;
use std::collections::HashMap;

use crate::domain::Tenant;

/// First tenant (in list order) owning `network_id`.
pub fn find_control_proxy<'a>(tenants: &'a [Tenant], network_id: &NetworkId) -> Option<&'a Tenant> {
    for tenant in tenants {
        for network in &tenant.networks {
            if network == network_id {
                return Some(tenant);
            }
        }
    }
    None
}

/// Network -> owning tenant index.
#[derive(Clone, Debug, Default)]
pub struct TenantIndex {
    /// Owning tenant position in `tenants`, by network.
    by_network: HashMap<NetworkId, usize>,
    tenants: Vec<Tenant>,
}

impl TenantIndex {
    /// Index a tenant snapshot. A network claimed twice keeps its first owner.
    pub fn build(tenants: Vec<Tenant>) -> Self {
        let mut by_network = HashMap::new();
        for (pos, tenant) in tenants.iter().enumerate() {
            for network in &tenant.networks {
                by_network.entry(network.clone()).or_insert(pos);
            }
        }
        Self {
            by_network,
            tenants,
        }
    }

    /// Owning tenant of `network_id`.
    pub fn lookup(&self, network_id: &NetworkId) -> Option<&Tenant> {
        self.by_network
            .get(network_id)
            .and_then(|pos| self.tenants.get(*pos))
    }

    /// Number of indexed networks.
    pub fn network_count(&self) -> usize {
        self.by_network.len()
    }

    /// Networks claimed by more than one tenant.
    pub fn conflicting_networks(&self) -> Vec<NetworkId> {
        let mut seen: HashMap<&NetworkId, usize> = HashMap::new();
        for tenant in &self.tenants {
            for network in &tenant.networks {
                *seen.entry(network).or_default() += 1;
            }
        }
        let mut conflicts: Vec<NetworkId> = seen
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(network, _)| network.clone())
            .collect();
        conflicts.sort();
        conflicts
    }
}
