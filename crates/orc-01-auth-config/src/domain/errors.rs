//! # Domain Errors
//!
//! Error types for the auth config cache.

use shared_types::{NetworkId, StoreError};
use thiserror::Error;

/// Auth config error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthConfigError {
    /// The backing store holds no config for this network.
    #[error("No auth config found for network {network_id}")]
    NotFound {
        /// Network that was looked up
        network_id: NetworkId,
    },

    /// The stored payload could not be interpreted as an auth config.
    #[error("Failed to convert config for network {network_id}: {reason}")]
    InvalidShape {
        /// Network that was looked up
        network_id: NetworkId,
        /// Deserialization failure detail
        reason: String,
    },

    /// Transport-level failure from the backing store, propagated unchanged.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl AuthConfigError {
    /// Short label used for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "not_found",
            Self::InvalidShape { .. } => "invalid_shape",
            Self::Store(_) => "store_error",
        }
    }
}
