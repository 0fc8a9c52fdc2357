//! In-memory device registry.

use async_trait::async_trait;
use parking_lot::RwLock;
use shared_types::{NetworkId, StoreError};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::{GatewayDevice, HardwareId};
use crate::ports::DeviceRegistry;

/// Device records keyed by (network, hardware ID).
#[derive(Default)]
pub struct InMemoryDeviceRegistry {
    records: RwLock<HashMap<(NetworkId, HardwareId), GatewayDevice>>,
    upsert_calls: AtomicUsize,
    failure: RwLock<Option<StoreError>>,
}

impl InMemoryDeviceRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registered record for a device.
    pub fn get(&self, network_id: &NetworkId, hardware_id: &HardwareId) -> Option<GatewayDevice> {
        self.records
            .read()
            .get(&(network_id.clone(), hardware_id.clone()))
            .cloned()
    }

    /// Number of registered devices.
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Whether no device is registered.
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    /// Make every subsequent upsert fail with `failure` (`None` clears it).
    pub fn fail_with(&self, failure: Option<StoreError>) {
        *self.failure.write() = failure;
    }

    /// Number of upserts attempted.
    pub fn upsert_calls(&self) -> usize {
        self.upsert_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DeviceRegistry for InMemoryDeviceRegistry {
    async fn upsert_device_registration(
        &self,
        network_id: &NetworkId,
        hardware_id: &HardwareId,
        record: &GatewayDevice,
    ) -> Result<(), StoreError> {
        self.upsert_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(failure) = self.failure.read().clone() {
            return Err(failure);
        }

        self.records
            .write()
            .insert((network_id.clone(), hardware_id.clone()), record.clone());
        Ok(())
    }
}
