//! # Auth Config Cache Flows
//!
//! Exercises `ConfigCache` against the in-memory config store with a manual
//! clock:
//!
//! 1. **TTL boundary**: a config loaded at `t0` is served from memory until
//!    `t0 + ttl` and reloaded exactly once after it
//! 2. **Not found**: the cache reports `NotFound` exactly when the store has
//!    no config, and never caches the miss
//! 3. **Concurrent misses**: parallel callers on one cold key all succeed,
//!    each may load, and the last write wins

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::time::timeout;

    use orc_01_auth_config::{
        AuthConfigApi, AuthConfigCacheConfig, AuthConfigError, ConfigCache,
        InMemoryNetworkConfigStore,
    };
    use shared_types::{ManualTimeSource, NetworkId, StoreError, TimeSource, UnixTimestamp};

    use crate::fixtures::{cellular_config, default_cellular_config, LTE_AUTH_AMF_B64};

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    const T0: u64 = 1_700_000_000;

    struct Fixture {
        cache: Arc<ConfigCache<Arc<InMemoryNetworkConfigStore>>>,
        store: Arc<InMemoryNetworkConfigStore>,
        clock: ManualTimeSource,
    }

    fn create_fixture(ttl_secs: u64) -> Fixture {
        let store = Arc::new(InMemoryNetworkConfigStore::new());
        let clock = ManualTimeSource::new(UnixTimestamp::from_secs(T0));
        let config = AuthConfigCacheConfig {
            ttl_secs,
            ..AuthConfigCacheConfig::default()
        };
        let time: Arc<dyn TimeSource> = Arc::new(clock.clone());
        let cache = Arc::new(ConfigCache::new(config, Arc::clone(&store), time));
        Fixture { cache, store, clock }
    }

    // =============================================================================
    // TTL BOUNDARY
    // =============================================================================

    #[tokio::test]
    async fn test_config_served_until_ttl_then_reloaded_once() {
        let f = create_fixture(600);
        let n1 = NetworkId::from("n1");
        f.store.put_cellular("n1", default_cellular_config());

        let first = f.cache.get_config(&n1).await.unwrap();
        assert_eq!(first.last_update, UnixTimestamp::from_secs(T0));
        assert_eq!(f.store.load_calls(), 1);

        // Backing value changes; the cache must not notice yet.
        f.store
            .put_cellular("n1", cellular_config("IiIiIiIiIiIiIiIiIiIiIg==", LTE_AUTH_AMF_B64));

        f.clock.set(UnixTimestamp::from_secs(T0 + 599));
        let cached = f.cache.get_config(&n1).await.unwrap();
        assert!(Arc::ptr_eq(&first, &cached));
        assert_eq!(f.store.load_calls(), 1);

        f.clock.set(UnixTimestamp::from_secs(T0 + 601));
        let refreshed = f.cache.get_config(&n1).await.unwrap();
        assert_eq!(f.store.load_calls(), 2);
        assert_eq!(refreshed.lte_auth_op, vec![0x22; 16]);
        assert_eq!(refreshed.last_update, UnixTimestamp::from_secs(T0 + 601));

        // The refreshed entry replaced the stale one.
        let again = f.cache.get_config(&n1).await.unwrap();
        assert!(Arc::ptr_eq(&refreshed, &again));
        assert_eq!(f.store.load_calls(), 2);
        assert_eq!(f.cache.len(), 1);
    }

    #[tokio::test]
    async fn test_entry_expires_exactly_at_ttl() {
        let f = create_fixture(600);
        let n1 = NetworkId::from("n1");
        f.store.put_cellular("n1", default_cellular_config());

        f.cache.get_config(&n1).await.unwrap();
        f.clock.set(UnixTimestamp::from_secs(T0 + 600));
        f.cache.get_config(&n1).await.unwrap();
        assert_eq!(f.store.load_calls(), 2);
    }

    #[tokio::test]
    async fn test_networks_expire_independently() {
        let f = create_fixture(600);
        f.store.put_cellular("n1", default_cellular_config());
        f.store.put_cellular("n2", default_cellular_config());

        f.cache.get_config(&NetworkId::from("n1")).await.unwrap();
        f.clock.advance(Duration::from_secs(300));
        f.cache.get_config(&NetworkId::from("n2")).await.unwrap();

        f.clock.advance(Duration::from_secs(301));
        f.cache.get_config(&NetworkId::from("n1")).await.unwrap();
        f.cache.get_config(&NetworkId::from("n2")).await.unwrap();

        // n1 reloaded, n2 still fresh.
        assert_eq!(f.store.load_calls(), 3);
    }

    // =============================================================================
    // NOT FOUND
    // =============================================================================

    #[tokio::test]
    async fn test_not_found_iff_store_has_no_config() {
        let f = create_fixture(600);
        let n1 = NetworkId::from("n1");

        let err = f.cache.get_config(&n1).await.unwrap_err();
        assert!(matches!(err, AuthConfigError::NotFound { .. }));
        assert!(f.cache.is_empty());

        f.store.put_cellular("n1", default_cellular_config());
        assert!(f.cache.get_config(&n1).await.is_ok());
        assert_eq!(f.store.load_calls(), 2);
    }

    #[tokio::test]
    async fn test_store_outage_surfaces_unchanged() {
        let f = create_fixture(600);
        f.store
            .fail_with(Some(StoreError::Unavailable("config store down".to_string())));

        let err = f.cache.get_config(&NetworkId::from("n1")).await.unwrap_err();
        assert_eq!(
            err,
            AuthConfigError::Store(StoreError::Unavailable("config store down".to_string()))
        );
    }

    #[tokio::test]
    async fn test_served_through_trait_object() {
        let f = create_fixture(600);
        f.store.put_cellular("n1", default_cellular_config());

        let api: Arc<dyn AuthConfigApi> = f.cache.clone();
        let cfg = api.get_config(&NetworkId::from("n1")).await.unwrap();
        assert_eq!(cfg.lte_auth_amf, vec![0x80, 0x00]);
        assert_eq!(cfg.profile("default").map(|p| p.max_dl_bit_rate), Some(200_000_000));
    }

    // =============================================================================
    // CONCURRENT MISSES
    // =============================================================================

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_misses_do_not_deadlock() {
        const CALLERS: usize = 16;

        let f = create_fixture(600);
        f.store.put_cellular("n1", default_cellular_config());
        f.store.set_latency(Some(Duration::from_millis(50)));

        let handles: Vec<_> = (0..CALLERS)
            .map(|_| {
                let cache = Arc::clone(&f.cache);
                tokio::spawn(async move { cache.get_config(&NetworkId::from("n1")).await })
            })
            .collect();

        let results = timeout(Duration::from_secs(5), futures::future::join_all(handles))
            .await
            .expect("concurrent lookups deadlocked");

        let configs: Vec<_> = results
            .into_iter()
            .map(|joined| joined.unwrap().unwrap())
            .collect();
        assert_eq!(configs.len(), CALLERS);

        // No single-flight: every cold caller may load.
        let loads = f.store.load_calls();
        assert!((1..=CALLERS).contains(&loads));

        // One entry remains and it is one of the loaded snapshots.
        assert_eq!(f.cache.len(), 1);
        f.store.set_latency(None);
        let cached = f.cache.get_config(&NetworkId::from("n1")).await.unwrap();
        assert_eq!(f.store.load_calls(), loads);
        assert!(configs.iter().any(|cfg| Arc::ptr_eq(cfg, &cached)));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_reads_of_fresh_entry_skip_store() {
        let f = create_fixture(600);
        f.store.put_cellular("n1", default_cellular_config());
        let seeded = f.cache.get_config(&NetworkId::from("n1")).await.unwrap();

        let handles: Vec<_> = (0..32)
            .map(|_| {
                let cache = Arc::clone(&f.cache);
                tokio::spawn(async move { cache.get_config(&NetworkId::from("n1")).await })
            })
            .collect();

        for joined in futures::future::join_all(handles).await {
            let cfg = joined.unwrap().unwrap();
            assert!(Arc::ptr_eq(&cfg, &seeded));
        }
        assert_eq!(f.store.load_calls(), 1);
    }
}
