//! # Registration Configuration

use serde::{Deserialize, Serialize};

use crate::domain::MAGMAD_GATEWAY_ENTITY_TYPE;

/// Registration service configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationConfig {
    /// Entity type of the gateway record updated in step 2.
    pub gateway_entity_type: String,

    /// Characters of the bootstrap token kept in log lines; the rest is masked.
    pub token_log_prefix_len: usize,
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            gateway_entity_type: MAGMAD_GATEWAY_ENTITY_TYPE.to_string(),
            token_log_prefix_len: 4,
        }
    }
}

impl RegistrationConfig {
    /// Create a config for testing (tokens fully masked).
    pub fn for_testing() -> Self {
        Self {
            token_log_prefix_len: 0,
            ..Self::default()
        }
    }

    /// Render a token for logging: a short prefix followed by `...`.
    pub fn mask_token(&self, token: &str) -> String {
        let prefix: String = token.chars().take(self.token_log_prefix_len).collect();
        format!("{}...", prefix)
    }
}
