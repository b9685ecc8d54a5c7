#![allow(dead_code)]

use async_trait::async_trait;
use meshdns_application::ports::{RecordSource, ServiceSpecSource};
use meshdns_domain::{DomainError, SyntheticService};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use tokio::sync::RwLock;

pub struct MockSpecSource {
    connected: AtomicBool,
    docs: RwLock<Vec<String>>,
    should_fail_scan: AtomicBool,
    fetch_count: AtomicU64,
}

impl MockSpecSource {
    pub fn new() -> Self {
        Self {
            connected: AtomicBool::new(false),
            docs: RwLock::new(Vec::new()),
            should_fail_scan: AtomicBool::new(false),
            fetch_count: AtomicU64::new(0),
        }
    }

    pub fn connected_with_docs(docs: Vec<&str>) -> Self {
        let source = Self::new();
        source.connected.store(true, Ordering::Relaxed);
        *source.docs.try_write().unwrap() = docs.into_iter().map(str::to_string).collect();
        source
    }

    pub async fn set_docs(&self, docs: Vec<&str>) {
        *self.docs.write().await = docs.into_iter().map(str::to_string).collect();
    }

    pub fn set_should_fail_scan(&self, fail: bool) {
        self.should_fail_scan.store(fail, Ordering::Relaxed);
    }

    pub fn fetch_count(&self) -> u64 {
        self.fetch_count.load(Ordering::Relaxed)
    }
}

/// Record source whose lookups always fail with a store error.
pub struct FailingRecordSource;

impl RecordSource for FailingRecordSource {
    fn records(&self, _name: &str, _zone: &str) -> Result<Vec<SyntheticService>, DomainError> {
        Err(DomainError::StoreUnavailable(
            "simulated store outage".to_string(),
        ))
    }

    fn serial(&self) -> u32 {
        1_700_000_000
    }

    fn min_ttl(&self) -> u32 {
        5
    }
}

/// Record source that accepts every name but never has data for it.
pub struct EmptyRecordSource;

impl RecordSource for EmptyRecordSource {
    fn records(&self, _name: &str, _zone: &str) -> Result<Vec<SyntheticService>, DomainError> {
        Ok(Vec::new())
    }

    fn serial(&self) -> u32 {
        1_700_000_000
    }

    fn min_ttl(&self) -> u32 {
        5
    }
}

#[async_trait]
impl ServiceSpecSource for MockSpecSource {
    fn is_connected(&self) -> bool {
        self.connected.load(Ordering::Relaxed)
    }

    async fn connect(&self) -> Result<(), DomainError> {
        self.connected.store(true, Ordering::Relaxed);
        Ok(())
    }

    async fn fetch_specs(&self) -> Result<Vec<String>, DomainError> {
        self.fetch_count.fetch_add(1, Ordering::Relaxed);
        if !self.is_connected() {
            return Err(DomainError::StoreUnavailable("not connected".to_string()));
        }
        if self.should_fail_scan.load(Ordering::Relaxed) {
            return Err(DomainError::StoreScan("simulated scan failure".to_string()));
        }
        Ok(self.docs.read().await.clone())
    }
}
