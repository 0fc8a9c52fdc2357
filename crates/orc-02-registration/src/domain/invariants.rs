//! # Domain Invariants
//!
//! Registration state machine.
//!
//! ```text
//! AwaitingIdentity -> AwaitingEntityUpdate -> AwaitingDeviceRegistration
//!     -> AwaitingProxyResolution -> Done
//!
//! any Awaiting* --(step error)--> Failed
//! ```
//!
//! Transitions only move forward. `Done` and `Failed` are terminal, and
//! reaching `Failed` does not undo earlier steps.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::value_objects::RegisterResult;

/// Entity type of gateway records in the configuration service.
pub const MAGMAD_GATEWAY_ENTITY_TYPE: &str = "magmad_gateway";

/// Step of the registration workflow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegistrationStep {
    /// Bootstrap token -> device info.
    ResolveIdentity,
    /// Write hardware ID and challenge key onto the gateway entity.
    UpdateEntity,
    /// Upsert the device registry record.
    RegisterDevice,
    /// Find the tenant's control proxy.
    ResolveControlProxy,
}

impl RegistrationStep {
    /// Metric label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ResolveIdentity => "resolve_identity",
            Self::UpdateEntity => "update_entity",
            Self::RegisterDevice => "register_device",
            Self::ResolveControlProxy => "resolve_control_proxy",
        }
    }

    /// Domain error message for a failure of this step.
    pub fn failure_message(&self, token: &str, cause: &dyn fmt::Display) -> String {
        match self {
            Self::ResolveIdentity => {
                format!("could not get device info from token {}: {}", token, cause)
            }
            Self::UpdateEntity => format!("error updating gateway: {}", cause),
            Self::RegisterDevice => format!("error registering device: {}", cause),
            Self::ResolveControlProxy => format!("error getting control proxy: {}", cause),
        }
    }
}

impl fmt::Display for RegistrationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Registration state machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistrationState {
    /// Waiting for the bootstrap token to be resolved.
    #[default]
    AwaitingIdentity,
    /// Waiting for the gateway entity update.
    AwaitingEntityUpdate,
    /// Waiting for the device registry upsert.
    AwaitingDeviceRegistration,
    /// Waiting for control proxy resolution.
    AwaitingProxyResolution,
    /// Registration completed.
    Done,
    /// A step failed; later steps were skipped.
    Failed,
}

impl RegistrationState {
    /// Step this state is waiting on, if any.
    pub fn pending_step(&self) -> Option<RegistrationStep> {
        match self {
            Self::AwaitingIdentity => Some(RegistrationStep::ResolveIdentity),
            Self::AwaitingEntityUpdate => Some(RegistrationStep::UpdateEntity),
            Self::AwaitingDeviceRegistration => Some(RegistrationStep::RegisterDevice),
            Self::AwaitingProxyResolution => Some(RegistrationStep::ResolveControlProxy),
            Self::Done | Self::Failed => None,
        }
    }

    /// State reached when the pending step succeeds.
    pub fn on_success(&self) -> Self {
        match self {
            Self::AwaitingIdentity => Self::AwaitingEntityUpdate,
            Self::AwaitingEntityUpdate => Self::AwaitingDeviceRegistration,
            Self::AwaitingDeviceRegistration => Self::AwaitingProxyResolution,
            Self::AwaitingProxyResolution => Self::Done,
            Self::Done => Self::Done,
            Self::Failed => Self::Failed,
        }
    }

    /// Check if transition is valid.
    pub fn can_transition_to(&self, next: RegistrationState) -> bool {
        if self.is_terminal() {
            return false;
        }
        next == Self::Failed || next == self.on_success()
    }

    /// Check if terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done | Self::Failed)
    }
}

/// Terminal record of one register call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistrationOutcome {
    /// `Done` or `Failed`.
    pub final_state: RegistrationState,
    /// Step that failed, when `final_state` is `Failed`.
    pub failed_step: Option<RegistrationStep>,
    /// Result returned to the caller.
    pub result: RegisterResult,
}

impl RegistrationOutcome {
    /// Outcome of a completed registration.
    pub fn done(control_proxy: String) -> Self {
        Self {
            final_state: RegistrationState::Done,
            failed_step: None,
            result: RegisterResult::success(control_proxy),
        }
    }

    /// Outcome of a registration that failed at `step`.
    pub fn failed(step: RegistrationStep, message: String) -> Self {
        Self {
            final_state: RegistrationState::Failed,
            failed_step: Some(step),
            result: RegisterResult::domain_error(message),
        }
    }

    /// Metric label of the last step reached.
    pub fn step_label(&self) -> &'static str {
        match self.failed_step {
            Some(step) => step.as_str(),
            None => "done",
        }
    }
}
