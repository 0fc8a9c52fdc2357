//! # Domain Invariants
//!
//! Freshness rule and constants for cached entries.

use super::entities::AuthConfig;
use shared_types::UnixTimestamp;
use std::time::Duration;

/// Default TTL of a cached auth config (10 minutes).
pub const DEFAULT_CONFIG_TTL_SECS: u64 = 10 * 60;

/// Network config type carrying the `epc` section.
pub const CELLULAR_NETWORK_CONFIG_TYPE: &str = "cellular_network";

/// Invariant: an entry is fresh iff `now < last_update + ttl`.
///
/// Evaluated lazily on read at millisecond resolution; nothing evicts stale
/// entries in the background.
pub fn is_fresh(config: &AuthConfig, now: UnixTimestamp, ttl: Duration) -> bool {
    now < config.last_update.plus(ttl)
}
