//! # ORC-01 Auth Config
//!
//! TTL-gated cache of per-network EPS authentication configuration.
//!
//! **Subsystem ID:** 01  
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! The authentication servicers need the operator key, AMF and subscriber
//! profiles of a network on every request. The backing configuration store
//! is slow, so this crate shields it behind per-network freshness windows:
//! - `ConfigLoader` fetches the raw cellular network config and maps its
//!   `epc` section into an `AuthConfig`
//! - `ConfigCache` memoizes loader results for `ttl_secs` per network
//!
//! ## Concurrency
//!
//! | Operation | Lock |
//! |-----------|------|
//! | Lookup + freshness check | shared |
//! | Backing fetch | none |
//! | Store refreshed entry | exclusive |
//!
//! Concurrent misses on the same network are not coalesced: every racing
//! caller fetches, and the last store wins.
//!
//! ## Module Structure
//!
//! ```text
//! orc-01-auth-config/
//! ├── domain/          # AuthConfig, raw cellular config model, errors
//! ├── ports/           # AuthConfigApi (inbound), NetworkConfigStore (outbound)
//! ├── application/     # ConfigLoader, ConfigCache
//! ├── adapters/        # In-memory NetworkConfigStore
//! └── config.rs        # AuthConfigCacheConfig
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

// Re-exports
pub use adapters::InMemoryNetworkConfigStore;
pub use application::{ConfigCache, ConfigLoader};
pub use config::AuthConfigCacheConfig;
pub use domain::{
    is_fresh, AuthConfig, AuthConfigError, CellularNetworkConfig, EpcConfig, SubscriberProfile,
    CELLULAR_NETWORK_CONFIG_TYPE, DEFAULT_CONFIG_TTL_SECS,
};
pub use ports::{AuthConfigApi, NetworkConfigStore, RawNetworkConfig};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
