#![allow(dead_code)]

use async_trait::async_trait;
use meshdns_application::ports::{DirectoryCachePort, RefreshOutcome};
use meshdns_domain::DomainError;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;

pub struct MockDirectoryCache {
    connected: AtomicBool,
    connect_count: AtomicU64,
    refresh_count: AtomicU64,
    should_fail_refresh: AtomicBool,
    /// Attempts after which a failing connect starts succeeding; 0 means
    /// the first attempt succeeds.
    connect_succeeds_after: AtomicU64,
    refresh_delay_ms: AtomicU64,
}

impl MockDirectoryCache {
    pub fn new() -> Self {
        Self {
            connected: AtomicBool::new(false),
            connect_count: AtomicU64::new(0),
            refresh_count: AtomicU64::new(0),
            should_fail_refresh: AtomicBool::new(false),
            connect_succeeds_after: AtomicU64::new(0),
            refresh_delay_ms: AtomicU64::new(0),
        }
    }

    pub fn connected() -> Self {
        let mock = Self::new();
        mock.connected.store(true, Ordering::Relaxed);
        mock
    }

    pub fn connect_count(&self) -> u64 {
        self.connect_count.load(Ordering::Relaxed)
    }

    pub fn refresh_count(&self) -> u64 {
        self.refresh_count.load(Ordering::Relaxed)
    }

    pub fn set_should_fail_refresh(&self, fail: bool) {
        self.should_fail_refresh.store(fail, Ordering::Relaxed);
    }

    pub fn set_connect_succeeds_after(&self, attempts: u64) {
        self.connect_succeeds_after.store(attempts, Ordering::Relaxed);
    }

    pub fn set_refresh_delay_ms(&self, millis: u64) {
        self.refresh_delay_ms.store(millis, Ordering::Relaxed);
    }
}

#[async_trait]
impl DirectoryCachePort for MockDirectoryCache {
    fn is_connected(&self) -> bool {
        self.connected.load(Ordering::Relaxed)
    }

    async fn connect_store(&self) -> Result<(), DomainError> {
        let attempt = self.connect_count.fetch_add(1, Ordering::Relaxed);
        if attempt < self.connect_succeeds_after.load(Ordering::Relaxed) {
            return Err(DomainError::StoreUnavailable(
                "simulated dial failure".to_string(),
            ));
        }
        self.connected.store(true, Ordering::Relaxed);
        Ok(())
    }

    async fn run_refresh_cycle(&self) -> Result<RefreshOutcome, DomainError> {
        self.refresh_count.fetch_add(1, Ordering::Relaxed);
        let delay = self.refresh_delay_ms.load(Ordering::Relaxed);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        if self.should_fail_refresh.load(Ordering::Relaxed) {
            return Err(DomainError::StoreScan("simulated scan failure".to_string()));
        }
        Ok(RefreshOutcome {
            connected: self.is_connected(),
            services: 1,
            skipped: 0,
        })
    }
}
