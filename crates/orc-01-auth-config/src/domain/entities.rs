//! # Domain Entities
//!
//! `AuthConfig` plus the slice of the raw cellular network config it is
//! built from.

use serde::{Deserialize, Serialize};
use serde_with::{base64::Base64, serde_as};
use shared_types::UnixTimestamp;
use std::collections::HashMap;

/// Aggregate bit-rate limits of a subscriber profile.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriberProfile {
    /// Maximum uplink bit rate (bps).
    pub max_ul_bit_rate: u64,
    /// Maximum downlink bit rate (bps).
    pub max_dl_bit_rate: u64,
}

/// Authentication parameters of one network.
///
/// Immutable once handed out; the cache swaps whole snapshots rather than
/// mutating them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthConfig {
    /// LTE operator key (OP).
    pub lte_auth_op: Vec<u8>,
    /// Authentication management field.
    pub lte_auth_amf: Vec<u8>,
    /// Subscriber profiles by name.
    pub sub_profiles: HashMap<String, SubscriberProfile>,
    /// When this snapshot was loaded from the backing store.
    pub last_update: UnixTimestamp,
}

impl AuthConfig {
    /// Build a snapshot from an `epc` section, stamped with `loaded_at`.
    pub fn from_epc(epc: EpcConfig, loaded_at: UnixTimestamp) -> Self {
        Self {
            lte_auth_op: epc.lte_auth_op,
            lte_auth_amf: epc.lte_auth_amf,
            sub_profiles: epc.sub_profiles,
            last_update: loaded_at,
        }
    }

    /// Look up a subscriber profile by name.
    pub fn profile(&self, name: &str) -> Option<&SubscriberProfile> {
        self.sub_profiles.get(name)
    }
}

/// EPC section of a cellular network config.
///
/// Byte fields are base64 strings on the wire.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpcConfig {
    /// LTE operator key (OP).
    #[serde_as(as = "Base64")]
    pub lte_auth_op: Vec<u8>,
    /// Authentication management field.
    #[serde_as(as = "Base64")]
    pub lte_auth_amf: Vec<u8>,
    /// Subscriber profiles by name.
    #[serde(default)]
    pub sub_profiles: HashMap<String, SubscriberProfile>,
}

/// Cellular network config as stored by the configuration service.
///
/// Only the `epc` section is modelled; other sections (RAN, feg) are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellularNetworkConfig {
    /// EPC section.
    pub epc: EpcConfig,
}
