//! Gateway device record construction.

use crate::domain::{ChallengeKey, GatewayChallengeKey, GatewayDevice, HardwareId};

/// Build the device record written to the entity store and device registry.
pub fn create_gateway_device(
    hardware_id: &HardwareId,
    challenge_key: &ChallengeKey,
) -> GatewayDevice {
    GatewayDevice {
        hardware_id: hardware_id.as_str().to_string(),
        key: GatewayChallengeKey {
            key_type: challenge_key.key_type.as_str().to_string(),
            key: challenge_key.key.clone(),
        },
    }
}
