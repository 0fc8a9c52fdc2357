//! In-memory tenant store.

use async_trait::async_trait;
use parking_lot::RwLock;
use shared_types::StoreError;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::Tenant;
use crate::ports::TenantStore;

/// Tenant list in insertion order.
#[derive(Default)]
pub struct InMemoryTenantStore {
    tenants: RwLock<Vec<Tenant>>,
    list_calls: AtomicUsize,
    failure: RwLock<Option<StoreError>>,
}

impl InMemoryTenantStore {
    /// Create a store with no tenants.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `tenants`.
    pub fn with_tenants(tenants: Vec<Tenant>) -> Self {
        Self {
            tenants: RwLock::new(tenants),
            ..Self::default()
        }
    }

    /// Append a tenant.
    pub fn add_tenant(&self, tenant: Tenant) {
        self.tenants.write().push(tenant);
    }

    /// Make every subsequent listing fail with `failure` (`None` clears it).
    pub fn fail_with(&self, failure: Option<StoreError>) {
        *self.failure.write() = failure;
    }

    /// Number of listings served.
    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TenantStore for InMemoryTenantStore {
    async fn list_all_tenants(&self) -> Result<Vec<Tenant>, StoreError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(failure) = self.failure.read().clone() {
            return Err(failure);
        }
        Ok(self.tenants.read().clone())
    }
}
