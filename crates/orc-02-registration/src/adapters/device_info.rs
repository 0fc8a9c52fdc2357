//! Token-to-identity map standing in for the bootstrapper.

use async_trait::async_trait;
use parking_lot::RwLock;
use shared_types::StoreError;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::DeviceInfo;
use crate::ports::DeviceInfoProvider;

/// In-memory bootstrap token registry.
#[derive(Default)]
pub struct InMemoryDeviceInfoProvider {
    tokens: RwLock<HashMap<String, DeviceInfo>>,
    lookup_calls: AtomicUsize,
    failure: RwLock<Option<StoreError>>,
}

impl InMemoryDeviceInfoProvider {
    /// Create a provider that knows no tokens.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue `token` for the given gateway identity.
    pub fn add_token(&self, token: impl Into<String>, info: DeviceInfo) {
        self.tokens.write().insert(token.into(), info);
    }

    /// Revoke a token.
    pub fn revoke(&self, token: &str) -> Option<DeviceInfo> {
        self.tokens.write().remove(token)
    }

    /// Make every subsequent lookup fail with `failure` (`None` clears it).
    pub fn fail_with(&self, failure: Option<StoreError>) {
        *self.failure.write() = failure;
    }

    /// Number of lookups served.
    pub fn lookup_calls(&self) -> usize {
        self.lookup_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DeviceInfoProvider for InMemoryDeviceInfoProvider {
    async fn get_device_info_from_token(&self, token: &str) -> Result<DeviceInfo, StoreError> {
        self.lookup_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(failure) = self.failure.read().clone() {
            return Err(failure);
        }

        self.tokens
            .read()
            .get(token)
            .cloned()
            .ok_or_else(|| StoreError::NotFound("unknown bootstrap token".to_string()))
    }
}
