//! # Domain Errors
//!
//! Errors raised by the control proxy resolver. Registration steps never
//! surface these directly; they are folded into `RegisterResult`.

use shared_types::{NetworkId, StoreError};
use thiserror::Error;

/// Registration error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// No tenant claims the network.
    #[error("tenantID for current NetworkID {network_id} not found")]
    NotFound {
        /// Network that was looked up
        network_id: NetworkId,
    },

    /// Transport-level failure from a collaborator, propagated unchanged.
    #[error(transparent)]
    Store(#[from] StoreError),
}
