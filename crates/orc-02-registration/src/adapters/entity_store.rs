//! In-memory configuration entity store.
//!
//! By default an upsert creates the entity. In strict mode the entity must
//! have been provisioned first, and upserting an unknown entity fails with
//! `StoreError::NotFound`, matching stores that only patch existing records.

use async_trait::async_trait;
use parking_lot::RwLock;
use shared_types::{NetworkId, StoreError};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use crate::domain::GatewayDevice;
use crate::ports::EntityStore;

type EntityKey = (NetworkId, String, String);

/// Map-backed entity store.
#[derive(Default)]
pub struct InMemoryEntityStore {
    /// Entities keyed by (network, type, id). `None` means provisioned but never written.
    entities: RwLock<HashMap<EntityKey, Option<GatewayDevice>>>,
    strict: AtomicBool,
    upsert_calls: AtomicUsize,
    failure: RwLock<Option<StoreError>>,
}

impl InMemoryEntityStore {
    /// Create a store that creates entities on first upsert.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that only patches provisioned entities.
    pub fn strict() -> Self {
        let store = Self::default();
        store.strict.store(true, Ordering::SeqCst);
        store
    }

    /// Declare an entity as existing without giving it a device record.
    pub fn provision(&self, network_id: impl Into<NetworkId>, entity_type: &str, entity_id: &str) {
        self.entities
            .write()
            .entry((network_id.into(), entity_type.to_string(), entity_id.to_string()))
            .or_insert(None);
    }

    /// Device record currently stored on an entity.
    pub fn get(
        &self,
        network_id: &NetworkId,
        entity_type: &str,
        entity_id: &str,
    ) -> Option<GatewayDevice> {
        self.entities
            .read()
            .get(&(network_id.clone(), entity_type.to_string(), entity_id.to_string()))
            .cloned()
            .flatten()
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
impl EntityStore for InMemoryEntityStore {
    async fn upsert_entity(
        &self,
        network_id: &NetworkId,
        entity_type: &str,
        entity_id: &str,
        patch: &GatewayDevice,
    ) -> Result<(), StoreError> {
        self.upsert_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(failure) = self.failure.read().clone() {
            return Err(failure);
        }

        let key = (network_id.clone(), entity_type.to_string(), entity_id.to_string());
        let mut entities = self.entities.write();
        if self.strict.load(Ordering::SeqCst) && !entities.contains_key(&key) {
            return Err(StoreError::NotFound(format!(
                "entity {}/{} in network {}",
                entity_type, entity_id, network_id
            )));
        }
        entities.insert(key, Some(patch.clone()));
        Ok(())
    }
}
