use meshdns_application::ports::DirectoryCachePort;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

const DEFAULT_RETRY_SECS: u64 = 5;

/// One-shot bootstrap task: dials the directory store on a fixed cadence
/// until a client is established, then exits for the lifetime of the
/// process. The first attempt happens one full interval after start, not
/// immediately. There is deliberately no cancellation path and no retry
/// cap; the resolver keeps trying for as long as it runs.
pub struct StoreConnectJob {
    cache: Arc<dyn DirectoryCachePort>,
    retry_secs: u64,
}

impl StoreConnectJob {
    pub fn new(cache: Arc<dyn DirectoryCachePort>) -> Self {
        Self {
            cache,
            retry_secs: DEFAULT_RETRY_SECS,
        }
    }

    pub fn with_retry_interval(mut self, retry_secs: u64) -> Self {
        self.retry_secs = retry_secs;
        self
    }

    pub async fn start(self: Arc<Self>) {
        info!(retry_secs = self.retry_secs, "Starting store connect job");

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(self.retry_secs));
            interval.tick().await;

            loop {
                interval.tick().await;
                if self.cache.is_connected() {
                    info!("Store connection established, connect job exiting");
                    break;
                }
                if let Err(e) = self.cache.connect_store().await {
                    warn!(error = %e, "Store connection attempt failed, will retry");
                }
            }
        });
    }
}
