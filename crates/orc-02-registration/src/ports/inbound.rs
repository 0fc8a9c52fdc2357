//! # Inbound Ports
//!
//! API exposed to registering gateways.

use async_trait::async_trait;

use crate::domain::{ChallengeKey, HardwareId, RegisterResult};

/// Registration API - inbound port.
#[async_trait]
pub trait RegistrationApi: Send + Sync {
    /// Register a gateway presenting a bootstrap token.
    ///
    /// Total: every failure is reported as `RegisterResult::DomainError`.
    async fn register(
        &self,
        token: &str,
        hardware_id: &HardwareId,
        challenge_key: &ChallengeKey,
    ) -> RegisterResult;
}
