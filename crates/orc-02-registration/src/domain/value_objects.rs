//! # Domain Value Objects
//!
//! Request-scoped identity and credential types, and the register result.

use serde::{Deserialize, Serialize};
use serde_with::{base64::Base64, serde_as};
use shared_types::NetworkId;
use std::fmt;

/// Hardware identifier reported by a gateway.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HardwareId(pub String);

impl HardwareId {
    /// Wrap a raw hardware ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HardwareId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Challenge key algorithm.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KeyType {
    /// Echo challenge (no signature).
    #[default]
    Echo,
    /// ECDSA over SHA-256, software key.
    SoftwareEcdsaSha256,
}

impl KeyType {
    /// Canonical wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyType::Echo => "ECHO",
            KeyType::SoftwareEcdsaSha256 => "SOFTWARE_ECDSA_SHA256",
        }
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Challenge key a gateway uses to answer bootstrap challenges.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeKey {
    /// Key algorithm.
    pub key_type: KeyType,
    /// Raw public key bytes.
    pub key: Vec<u8>,
}

impl ChallengeKey {
    /// Create a challenge key.
    pub fn new(key_type: KeyType, key: impl Into<Vec<u8>>) -> Self {
        Self {
            key_type,
            key: key.into(),
        }
    }
}

/// Identity derived from a bootstrap token.
///
/// Produced by the bootstrapper; registration trusts it as authenticated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceInfo {
    /// Network the gateway belongs to.
    pub network_id: NetworkId,
    /// Logical gateway ID within that network.
    pub logical_id: String,
}

impl DeviceInfo {
    /// Create device info.
    pub fn new(network_id: impl Into<NetworkId>, logical_id: impl Into<String>) -> Self {
        Self {
            network_id: network_id.into(),
            logical_id: logical_id.into(),
        }
    }
}

/// Challenge key as stored on gateway records (key bytes base64 on the wire).
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayChallengeKey {
    /// Key algorithm wire name.
    pub key_type: String,
    /// Public key bytes.
    #[serde_as(as = "Base64")]
    pub key: Vec<u8>,
}

/// Device record written to both the gateway entity and the device registry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayDevice {
    /// Hardware ID of the gateway.
    pub hardware_id: String,
    /// Challenge key.
    pub key: GatewayChallengeKey,
}

/// Result of one register call.
///
/// Exactly one variant is ever produced per call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegisterResult {
    /// Registration finished; the gateway should use this control proxy.
    Success {
        /// Control proxy address.
        control_proxy: String,
    },
    /// Registration was rejected for a known reason.
    DomainError {
        /// Failing step and wrapped cause.
        message: String,
    },
}

impl RegisterResult {
    /// Build a success result.
    pub fn success(control_proxy: impl Into<String>) -> Self {
        Self::Success {
            control_proxy: control_proxy.into(),
        }
    }

    /// Build a domain error result.
    pub fn domain_error(message: impl Into<String>) -> Self {
        Self::DomainError {
            message: message.into(),
        }
    }

    /// Check if registration succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Control proxy on success.
    pub fn control_proxy(&self) -> Option<&str> {
        match self {
            Self::Success { control_proxy } => Some(control_proxy),
            Self::DomainError { .. } => None,
        }
    }

    /// Error message on failure.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::DomainError { message } => Some(message),
        }
    }
}
