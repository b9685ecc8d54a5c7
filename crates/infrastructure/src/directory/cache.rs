use super::snapshot::DirectorySnapshot;
use arc_swap::ArcSwap;
use async_trait::async_trait;
use meshdns_application::ports::{DirectoryCachePort, RefreshOutcome, ServiceDirectory, ServiceSpecSource};
use meshdns_domain::{DomainError, ServiceRecord};
use std::sync::Arc;
use tracing::debug;

/// In-memory directory of mesh services, kept fresh by the sync job.
///
/// Mutation is confined to the cycle methods the jobs drive; the query path
/// only loads the current snapshot, which is swapped atomically and never
/// patched in place. A failed cycle leaves the previous snapshot visible.
pub struct DirectoryCache {
    source: Arc<dyn ServiceSpecSource>,
    snapshot: ArcSwap<DirectorySnapshot>,
}

impl DirectoryCache {
    pub fn new(source: Arc<dyn ServiceSpecSource>) -> Self {
        Self {
            source,
            snapshot: ArcSwap::from_pointee(DirectorySnapshot::default()),
        }
    }
}

impl ServiceDirectory for DirectoryCache {
    fn list_services(&self) -> Vec<Arc<ServiceRecord>> {
        self.snapshot.load().services.clone()
    }

    fn service_by_name(&self, name: &str) -> Vec<Arc<ServiceRecord>> {
        match self.snapshot.load().by_name.get(name) {
            Some(record) => vec![Arc::clone(record)],
            None => Vec::new(),
        }
    }
}

#[async_trait]
impl DirectoryCachePort for DirectoryCache {
    fn is_connected(&self) -> bool {
        self.source.is_connected()
    }

    async fn connect_store(&self) -> Result<(), DomainError> {
        self.source.connect().await
    }

    async fn run_refresh_cycle(&self) -> Result<RefreshOutcome, DomainError> {
        // Nothing to scan until the connect job has produced a client.
        if !self.source.is_connected() {
            return Ok(RefreshOutcome::default());
        }

        let docs = self.source.fetch_specs().await?;
        let (snapshot, skipped) = DirectorySnapshot::from_documents(&docs);
        let services = snapshot.services.len();

        // Wholesale replacement: deregistered services simply vanish.
        self.snapshot.store(Arc::new(snapshot));
        debug!(services, skipped, "Published directory snapshot");

        Ok(RefreshOutcome {
            connected: true,
            services,
            skipped,
        })
    }
}
