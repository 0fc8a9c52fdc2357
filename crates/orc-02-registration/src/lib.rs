//! # ORC-02 Gateway Registration
//!
//! Provisions a new gateway from a one-time bootstrap token.
//!
//! **Subsystem ID:** 02  
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! A gateway presents its bootstrap token, hardware ID and challenge key.
//! The registration service then, strictly in order:
//!
//! | Step | Collaborator | On failure |
//! |------|--------------|------------|
//! | Resolve identity | `DeviceInfoProvider` | `could not get device info from token ..` |
//! | Update gateway entity | `EntityStore` | `error updating gateway: ..` |
//! | Register device | `DeviceRegistry` | `error registering device: ..` |
//! | Resolve control proxy | `ControlProxyResolver` | `error getting control proxy: ..` |
//!
//! Every failure becomes a `RegisterResult::DomainError`; `register` never
//! returns a transport error. Nothing is rolled back: a gateway whose proxy
//! lookup fails stays updated and registered.
//!
//! ## Module Structure
//!
//! ```text
//! orc-02-registration/
//! ├── domain/          # DeviceInfo, ChallengeKey, Tenant, RegisterResult, state machine
//! ├── algorithms/      # Tenant scan, tenant index, gateway record construction
//! ├── ports/           # RegistrationApi (inbound), collaborator traits (outbound)
//! ├── application/     # RegistrationService, TenantScanResolver, SnapshotResolver
//! ├── adapters/        # In-memory collaborators
//! └── config.rs        # RegistrationConfig
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod algorithms;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

// Re-exports
pub use adapters::{
    InMemoryDeviceInfoProvider, InMemoryDeviceRegistry, InMemoryEntityStore, InMemoryTenantStore,
};
pub use algorithms::{create_gateway_device, find_control_proxy, TenantIndex};
pub use application::{RegistrationService, SnapshotResolver, TenantScanResolver};
pub use config::RegistrationConfig;
pub use domain::{
    ChallengeKey, DeviceInfo, GatewayChallengeKey, GatewayDevice, HardwareId, KeyType,
    RegisterResult, RegistrationError, RegistrationOutcome, RegistrationState, RegistrationStep,
    Tenant, MAGMAD_GATEWAY_ENTITY_TYPE,
};
pub use ports::{
    ControlProxyResolver, DeviceInfoProvider, DeviceRegistry, EntityStore, RegistrationApi,
    TenantStore,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
