//! # Registration Service
//!
//! Drives the gateway registration workflow through `RegistrationState`.
//!
//! Each step either advances the state or ends the call in `Failed` with a
//! domain error naming the step. There is no compensation: side effects of
//! steps that already succeeded stay committed, and a caller retries by
//! reissuing the whole call. All collaborators are expected to be idempotent.

use async_trait::async_trait;
use orc_telemetry::{REGISTRATIONS, REGISTRATION_DURATION};
use std::fmt;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn, Instrument};

use crate::algorithms::create_gateway_device;
use crate::config::RegistrationConfig;
use crate::domain::{
    ChallengeKey, HardwareId, RegisterResult, RegistrationOutcome, RegistrationState,
    RegistrationStep,
};
use crate::ports::{
    ControlProxyResolver, DeviceInfoProvider, DeviceRegistry, EntityStore, RegistrationApi,
};

/// Registration service - orchestrates the five registration steps.
pub struct RegistrationService<D, E, R, P>
where
    D: DeviceInfoProvider,
    E: EntityStore,
    R: DeviceRegistry,
    P: ControlProxyResolver,
{
    config: RegistrationConfig,
    device_info: Arc<D>,
    entities: Arc<E>,
    registry: Arc<R>,
    resolver: Arc<P>,
}

/// Per-call walk through the state machine.
struct Flow<'a> {
    state: RegistrationState,
    token: &'a str,
}

impl<'a> Flow<'a> {
    fn new(token: &'a str) -> Self {
        Self {
            state: RegistrationState::AwaitingIdentity,
            token,
        }
    }

    /// Record success of `step`, which must be the pending one.
    fn advance(&mut self, step: RegistrationStep) {
        debug_assert_eq!(self.state.pending_step(), Some(step));
        let next = self.state.on_success();
        debug_assert!(self.state.can_transition_to(next));
        self.state = next;
    }

    /// End the flow with `step` failing on `cause`.
    fn fail(&mut self, step: RegistrationStep, cause: &dyn fmt::Display) -> RegistrationOutcome {
        debug_assert_eq!(self.state.pending_step(), Some(step));
        self.state = RegistrationState::Failed;
        RegistrationOutcome::failed(step, step.failure_message(self.token, cause))
    }
}

impl<D, E, R, P> RegistrationService<D, E, R, P>
where
    D: DeviceInfoProvider,
    E: EntityStore,
    R: DeviceRegistry,
    P: ControlProxyResolver,
{
    /// Create a new registration service.
    pub fn new(
        config: RegistrationConfig,
        device_info: Arc<D>,
        entities: Arc<E>,
        registry: Arc<R>,
        resolver: Arc<P>,
    ) -> Self {
        Self {
            config,
            device_info,
            entities,
            registry,
            resolver,
        }
    }

    /// Service configuration.
    pub fn config(&self) -> &RegistrationConfig {
        &self.config
    }

    /// Run the workflow and return its terminal state along with the result.
    pub async fn register_with_trace(
        &self,
        token: &str,
        hardware_id: &HardwareId,
        challenge_key: &ChallengeKey,
    ) -> RegistrationOutcome {
        let started = Instant::now();
        let outcome = self.run(token, hardware_id, challenge_key).await;
        REGISTRATION_DURATION.observe(started.elapsed().as_secs_f64());

        let label = if outcome.result.is_success() { "success" } else { "failed" };
        REGISTRATIONS
            .with_label_values(&[label, outcome.step_label()])
            .inc();

        match &outcome.result {
            RegisterResult::Success { control_proxy } => info!(
                "[orc-02] Registered gateway hw={} with control proxy {}",
                hardware_id, control_proxy
            ),
            RegisterResult::DomainError { .. } => warn!(
                "[orc-02] Registration of hw={} (token {}) failed at {}",
                hardware_id,
                self.config.mask_token(token),
                outcome.step_label()
            ),
        }
        outcome
    }

    async fn run(
        &self,
        token: &str,
        hardware_id: &HardwareId,
        challenge_key: &ChallengeKey,
    ) -> RegistrationOutcome {
        let mut flow = Flow::new(token);

        // Step 1: resolve identity
        let device_info = match self.device_info.get_device_info_from_token(token).await {
            Ok(info) => info,
            Err(e) => return flow.fail(RegistrationStep::ResolveIdentity, &e),
        };
        debug!(
            "[orc-02] Token {} resolved to gateway {} in network {}",
            self.config.mask_token(token),
            device_info.logical_id,
            device_info.network_id
        );
        flow.advance(RegistrationStep::ResolveIdentity);

        let device = create_gateway_device(hardware_id, challenge_key);

        // Step 2: reconcile gateway entity
        if let Err(e) = self
            .entities
            .upsert_entity(
                &device_info.network_id,
                &self.config.gateway_entity_type,
                &device_info.logical_id,
                &device,
            )
            .await
        {
            return flow.fail(RegistrationStep::UpdateEntity, &e);
        }
        flow.advance(RegistrationStep::UpdateEntity);

        // Step 3: register device
        if let Err(e) = self
            .registry
            .upsert_device_registration(&device_info.network_id, hardware_id, &device)
            .await
        {
            return flow.fail(RegistrationStep::RegisterDevice, &e);
        }
        flow.advance(RegistrationStep::RegisterDevice);

        // Step 4: resolve control proxy
        let control_proxy = match self.resolver.resolve(&device_info.network_id).await {
            Ok(cp) => cp,
            Err(e) => return flow.fail(RegistrationStep::ResolveControlProxy, &e),
        };
        flow.advance(RegistrationStep::ResolveControlProxy);

        // Step 5: build response
        debug_assert_eq!(flow.state, RegistrationState::Done);
        RegistrationOutcome::done(control_proxy)
    }
}

#[async_trait]
impl<D, E, R, P> RegistrationApi for RegistrationService<D, E, R, P>
where
    D: DeviceInfoProvider + 'static,
    E: EntityStore + 'static,
    R: DeviceRegistry + 'static,
    P: ControlProxyResolver + 'static,
{
    async fn register(
        &self,
        token: &str,
        hardware_id: &HardwareId,
        challenge_key: &ChallengeKey,
    ) -> RegisterResult {
        let span = orc_telemetry::request_span(orc_telemetry::SUBSYSTEM_REGISTRATION, "register");
        self.register_with_trace(token, hardware_id, challenge_key)
            .instrument(span)
            .await
            .result
    }
}
