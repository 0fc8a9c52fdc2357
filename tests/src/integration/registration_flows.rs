//! # Registration Flows
//!
//! End-to-end gateway registration over the in-memory collaborators.
//!
//! ## Flows Tested:
//!
//! 1. **Happy path**: token resolves, entity and registry are written, the
//!    owning tenant's control proxy is returned
//! 2. **Unknown token**: the call stops at identity resolution and no other
//!    collaborator is touched
//! 3. **Unowned network**: entity and registry writes stay committed even
//!    though the proxy lookup fails
//! 4. **Resolver choice**: scan and snapshot resolvers agree
//! 5. **Metrics**: outcomes show up in the Prometheus exposition

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use orc_02_registration::{
        ChallengeKey, ControlProxyResolver, DeviceInfo, HardwareId, InMemoryDeviceInfoProvider,
        InMemoryDeviceRegistry, InMemoryEntityStore, InMemoryTenantStore, KeyType,
        RegisterResult, RegistrationApi, RegistrationConfig, RegistrationService,
        RegistrationState, RegistrationStep, SnapshotResolver, Tenant, TenantScanResolver,
        MAGMAD_GATEWAY_ENTITY_TYPE,
    };
    use orc_telemetry::{gather_metrics, register_metrics, REGISTRATIONS};
    use shared_types::{NetworkId, StoreError};

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    struct Collaborators {
        device_info: Arc<InMemoryDeviceInfoProvider>,
        entities: Arc<InMemoryEntityStore>,
        registry: Arc<InMemoryDeviceRegistry>,
        tenants: Arc<InMemoryTenantStore>,
    }

    fn create_collaborators() -> Collaborators {
        let device_info = Arc::new(InMemoryDeviceInfoProvider::new());
        device_info.add_token("T1", DeviceInfo::new("n1", "g1"));
        device_info.add_token("T2", DeviceInfo::new("n2", "g2"));

        let tenants = Arc::new(InMemoryTenantStore::with_tenants(vec![
            Tenant::new(7, ["n1"], "proxy.example:9443").with_name("acme"),
            Tenant::new(8, ["n3", "n4"], "other.example:9443").with_name("globex"),
        ]));

        Collaborators {
            device_info,
            entities: Arc::new(InMemoryEntityStore::new()),
            registry: Arc::new(InMemoryDeviceRegistry::new()),
            tenants,
        }
    }

    fn service_with<P: ControlProxyResolver + 'static>(
        c: &Collaborators,
        resolver: P,
    ) -> Arc<dyn RegistrationApi> {
        Arc::new(RegistrationService::new(
            RegistrationConfig::default(),
            Arc::clone(&c.device_info),
            Arc::clone(&c.entities),
            Arc::clone(&c.registry),
            Arc::new(resolver),
        ))
    }

    fn scan_service(c: &Collaborators) -> Arc<dyn RegistrationApi> {
        service_with(c, TenantScanResolver::new(Arc::clone(&c.tenants)))
    }

    fn hwid() -> HardwareId {
        HardwareId::new("hw-1")
    }

    fn key() -> ChallengeKey {
        ChallengeKey::new(KeyType::SoftwareEcdsaSha256, vec![0x04, 0xAB, 0xCD])
    }

    // =============================================================================
    // HAPPY PATH
    // =============================================================================

    #[tokio::test]
    async fn test_register_returns_owning_tenant_proxy() {
        let c = create_collaborators();
        let service = scan_service(&c);

        let result = service.register("T1", &hwid(), &key()).await;
        assert_eq!(result, RegisterResult::success("proxy.example:9443"));

        let n1 = NetworkId::from("n1");
        let entity = c.entities.get(&n1, MAGMAD_GATEWAY_ENTITY_TYPE, "g1").unwrap();
        let record = c.registry.get(&n1, &hwid()).unwrap();
        assert_eq!(entity, record);
        assert_eq!(record.hardware_id, "hw-1");
        assert_eq!(record.key.key_type, "SOFTWARE_ECDSA_SHA256");
        assert_eq!(record.key.key, vec![0x04, 0xAB, 0xCD]);
    }

    #[tokio::test]
    async fn test_strict_entity_store_accepts_provisioned_gateway() {
        let mut c = create_collaborators();
        let strict = InMemoryEntityStore::strict();
        strict.provision("n1", MAGMAD_GATEWAY_ENTITY_TYPE, "g1");
        c.entities = Arc::new(strict);
        let service = scan_service(&c);

        assert!(service.register("T1", &hwid(), &key()).await.is_success());

        // g2 was never provisioned.
        c.tenants.add_tenant(Tenant::new(9, ["n2"], "third.example:9443"));
        let result = service.register("T2", &hwid(), &key()).await;
        assert!(result
            .error_message()
            .unwrap()
            .starts_with("error updating gateway: "));
    }

    // =============================================================================
    // SHORT-CIRCUIT
    // =============================================================================

    #[tokio::test]
    async fn test_unknown_token_touches_nothing_else() {
        let c = create_collaborators();
        let service = scan_service(&c);

        let result = service.register("bogus", &hwid(), &key()).await;
        let message = result.error_message().unwrap();
        assert!(message.starts_with("could not get device info from token bogus: "));

        assert_eq!(c.device_info.lookup_calls(), 1);
        assert_eq!(c.entities.upsert_calls(), 0);
        assert_eq!(c.registry.upsert_calls(), 0);
        assert_eq!(c.tenants.list_calls(), 0);
    }

    #[tokio::test]
    async fn test_every_failure_is_a_domain_error() {
        let c = create_collaborators();
        let service = scan_service(&c);

        c.device_info
            .fail_with(Some(StoreError::Unavailable("bootstrapper".to_string())));
        assert!(!service.register("T1", &hwid(), &key()).await.is_success());
        c.device_info.fail_with(None);

        c.entities
            .fail_with(Some(StoreError::Internal("config db".to_string())));
        assert!(!service.register("T1", &hwid(), &key()).await.is_success());
        c.entities.fail_with(None);

        c.registry
            .fail_with(Some(StoreError::Unavailable("registry".to_string())));
        assert!(!service.register("T1", &hwid(), &key()).await.is_success());
        c.registry.fail_with(None);

        c.tenants
            .fail_with(Some(StoreError::Unavailable("tenants".to_string())));
        let result = service.register("T1", &hwid(), &key()).await;
        assert_eq!(
            result.error_message(),
            Some("error getting control proxy: Store unavailable: tenants")
        );
        c.tenants.fail_with(None);

        assert!(service.register("T1", &hwid(), &key()).await.is_success());
    }

    // =============================================================================
    // NO ROLLBACK
    // =============================================================================

    #[tokio::test]
    async fn test_unowned_network_keeps_side_effects() {
        let c = create_collaborators();
        let service = RegistrationService::new(
            RegistrationConfig::default(),
            Arc::clone(&c.device_info),
            Arc::clone(&c.entities),
            Arc::clone(&c.registry),
            Arc::new(TenantScanResolver::new(Arc::clone(&c.tenants))),
        );

        let outcome = service.register_with_trace("T2", &hwid(), &key()).await;
        assert_eq!(outcome.final_state, RegistrationState::Failed);
        assert_eq!(outcome.failed_step, Some(RegistrationStep::ResolveControlProxy));
        assert_eq!(
            outcome.result.error_message(),
            Some("error getting control proxy: tenantID for current NetworkID n2 not found")
        );

        let n2 = NetworkId::from("n2");
        assert!(c.entities.get(&n2, MAGMAD_GATEWAY_ENTITY_TYPE, "g2").is_some());
        assert!(c.registry.get(&n2, &hwid()).is_some());

        // Retry after the tenant is set up succeeds without duplicate records.
        c.tenants.add_tenant(Tenant::new(9, ["n2"], "third.example:9443"));
        let retry = service.register_with_trace("T2", &hwid(), &key()).await;
        assert_eq!(retry.final_state, RegistrationState::Done);
        assert_eq!(retry.result.control_proxy(), Some("third.example:9443"));
        assert_eq!(c.registry.len(), 1);
    }

    // =============================================================================
    // RESOLVERS
    // =============================================================================

    #[tokio::test]
    async fn test_snapshot_and_scan_resolvers_agree() {
        let c = create_collaborators();
        c.device_info.add_token("T3", DeviceInfo::new("n4", "g3"));

        let snapshot = SnapshotResolver::load(c.tenants.as_ref()).await.unwrap();
        let by_snapshot = service_with(&c, snapshot);
        let by_scan = scan_service(&c);

        for token in ["T1", "T2", "T3", "bogus"] {
            assert_eq!(
                by_snapshot.register(token, &hwid(), &key()).await,
                by_scan.register(token, &hwid(), &key()).await,
                "token {}",
                token
            );
        }
    }

    #[tokio::test]
    async fn test_first_listed_tenant_wins_shared_network() {
        let c = create_collaborators();
        c.tenants
            .add_tenant(Tenant::new(10, ["n1"], "late.example:9443"));
        let service = scan_service(&c);

        let result = service.register("T1", &hwid(), &key()).await;
        assert_eq!(result.control_proxy(), Some("proxy.example:9443"));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_parallel_registrations_are_independent() {
        let c = create_collaborators();
        for i in 0..20 {
            c.device_info
                .add_token(format!("P{}", i), DeviceInfo::new("n1", format!("pg{}", i)));
        }
        let service = scan_service(&c);

        let handles: Vec<_> = (0..20)
            .map(|i| {
                let service = Arc::clone(&service);
                tokio::spawn(async move {
                    service
                        .register(&format!("P{}", i), &HardwareId::new(format!("hw-{}", i)), &key())
                        .await
                })
            })
            .collect();

        for joined in futures::future::join_all(handles).await {
            assert!(joined.unwrap().is_success());
        }
        assert_eq!(c.registry.len(), 20);
    }

    // =============================================================================
    // METRICS
    // =============================================================================

    #[tokio::test]
    async fn test_outcomes_are_exported_as_metrics() {
        register_metrics().unwrap();
        let c = create_collaborators();
        let service = scan_service(&c);

        let done = REGISTRATIONS.with_label_values(&["success", "done"]);
        let unowned = REGISTRATIONS.with_label_values(&["failed", "resolve_control_proxy"]);
        let (done_before, unowned_before) = (done.get(), unowned.get());

        service.register("T1", &hwid(), &key()).await;
        service.register("T2", &hwid(), &key()).await;

        // Counters are process-wide; other tests may add to them concurrently.
        assert!(done.get() > done_before);
        assert!(unowned.get() > unowned_before);

        let text = gather_metrics().unwrap();
        assert!(text.contains("orc_registration_requests_total"));
        assert!(text.contains("orc_registration_duration_seconds"));
    }
}
