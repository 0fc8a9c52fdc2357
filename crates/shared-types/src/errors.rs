//! # Error Types
//!
//! Transport-level errors reported by backing collaborators.

use thiserror::Error;

/// Failure reported by a backing store or remote collaborator.
///
/// Subsystems propagate these unchanged to their callers; they never
/// reinterpret a `StoreError` as a domain condition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The collaborator could not be reached or timed out.
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// The collaborator reported that the requested item does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The collaborator rejected the request as invalid.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Any other collaborator-side failure.
    #[error("Internal store error: {0}")]
    Internal(String),
}
