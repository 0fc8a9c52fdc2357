//! # Adapters
//!
//! In-memory implementations of the outbound ports. Each one counts calls
//! and can be told to fail, so tests can check which steps ran.

mod device_info;
mod entity_store;
mod registry;
mod tenant_store;

pub use device_info::InMemoryDeviceInfoProvider;
pub use entity_store::InMemoryEntityStore;
pub use registry::InMemoryDeviceRegistry;
pub use tenant_store::InMemoryTenantStore;
