//! # Algorithms
//!
//! Pure functions used by the registration service.

pub mod control_proxy;
pub mod gateway_device;

pub use control_proxy::{find_control_proxy, TenantIndex};
pub use gateway_device::create_gateway_device;
