//! # Shared Types Crate
//!
//! Types shared by every orchestrator subsystem.
//!
//! ## Contents
//!
//! - **Identifiers**: `NetworkId`
//! - **Time**: `UnixTimestamp` (milliseconds), the `TimeSource` port and its implementations
//! - **Errors**: `StoreError`, the transport-level failure returned by
//!   backing collaborators (config, entity, tenant stores)

pub mod entities;
pub mod errors;
pub mod time;

pub use entities::*;
pub use errors::*;
pub use time::*;
