//! # Outbound Ports
//!
//! Collaborators the registration workflow calls, in call order.

use async_trait::async_trait;
use shared_types::{NetworkId, StoreError};

use crate::domain::{DeviceInfo, GatewayDevice, HardwareId, RegistrationError, Tenant};

/// Bootstrapper identity service - outbound port.
#[async_trait]
pub trait DeviceInfoProvider: Send + Sync {
    /// Resolve a bootstrap token to the gateway's identity.
    async fn get_device_info_from_token(&self, token: &str) -> Result<DeviceInfo, StoreError>;
}

/// Configuration entity store - outbound port.
#[async_trait]
pub trait EntityStore: Send + Sync {
    /// Write `patch` onto an entity. Idempotent.
    async fn upsert_entity(
        &self,
        network_id: &NetworkId,
        entity_type: &str,
        entity_id: &str,
        patch: &GatewayDevice,
    ) -> Result<(), StoreError>;
}

/// Device registry - outbound port.
#[async_trait]
pub trait DeviceRegistry: Send + Sync {
    /// Record a device under its hardware ID. Idempotent.
    async fn upsert_device_registration(
        &self,
        network_id: &NetworkId,
        hardware_id: &HardwareId,
        record: &GatewayDevice,
    ) -> Result<(), StoreError>;
}

/// Tenant store - outbound port.
#[async_trait]
pub trait TenantStore: Send + Sync {
    /// List every tenant.
    async fn list_all_tenants(&self) -> Result<Vec<Tenant>, StoreError>;
}

/// Control proxy resolution - outbound port of the registration service.
///
/// Implemented in this crate by `TenantScanResolver`; injectable so an
/// indexed implementation can replace the scan.
#[async_trait]
pub trait ControlProxyResolver: Send + Sync {
    /// Control proxy address of the tenant owning `network_id`.
    ///
    /// # Errors
    /// - `NotFound` if no tenant claims the network
    /// - `Store` for tenant store failures, unchanged
    async fn resolve(&self, network_id: &NetworkId) -> Result<String, RegistrationError>;
}
