//! Shared fixtures for the integration flows.

use serde_json::{json, Value};

/// Base64 of `[0x11; 16]`.
pub const LTE_AUTH_OP_B64: &str = "EREREREREREREREREREREQ==";

/// Base64 of `[0x80, 0x00]`.
pub const LTE_AUTH_AMF_B64: &str = "gAA=";

/// Raw cellular network config carrying the given OP and AMF.
pub fn cellular_config(lte_auth_op: &str, lte_auth_amf: &str) -> Value {
    json!({
        "epc": {
            "lte_auth_op": lte_auth_op,
            "lte_auth_amf": lte_auth_amf,
            "sub_profiles": {
                "default": { "max_ul_bit_rate": 100_000_000u64, "max_dl_bit_rate": 200_000_000u64 }
            }
        }
    })
}

/// Raw cellular network config with the default fixture keys.
pub fn default_cellular_config() -> Value {
    cellular_config(LTE_AUTH_OP_B64, LTE_AUTH_AMF_B64)
}
