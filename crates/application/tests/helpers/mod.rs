#![allow(dead_code)]

use meshdns_application::ports::ServiceDirectory;
use meshdns_domain::ServiceRecord;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

pub struct MockServiceDirectory {
    services: Vec<Arc<ServiceRecord>>,
    lookup_count: AtomicU64,
}

impl MockServiceDirectory {
    pub fn new() -> Self {
        Self {
            services: Vec::new(),
            lookup_count: AtomicU64::new(0),
        }
    }

    pub fn with_services(entries: Vec<(&str, &str, u16)>) -> Self {
        Self {
            services: entries
                .into_iter()
                .map(|(name, tenant, port)| ServiceRecord::new(name, tenant, port))
                .collect(),
            lookup_count: AtomicU64::new(0),
        }
    }

    pub fn lookup_count(&self) -> u64 {
        self.lookup_count.load(Ordering::Relaxed)
    }
}

impl ServiceDirectory for MockServiceDirectory {
    fn list_services(&self) -> Vec<Arc<ServiceRecord>> {
        self.services.clone()
    }

    fn service_by_name(&self, name: &str) -> Vec<Arc<ServiceRecord>> {
        self.lookup_count.fetch_add(1, Ordering::Relaxed);
        self.services
            .iter()
            .filter(|s| s.name == name)
            .cloned()
            .collect()
    }
}
