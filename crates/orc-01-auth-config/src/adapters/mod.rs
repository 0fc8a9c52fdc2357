//! # Adapters
//!
//! Outbound port implementations.

pub mod in_memory;

pub use in_memory::InMemoryNetworkConfigStore;
