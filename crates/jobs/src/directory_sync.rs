use meshdns_application::ports::DirectoryCachePort;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

const DEFAULT_INTERVAL_SECS: u64 = 5;

/// Floor for the re-arm delay when a cycle overruns the interval: fire
/// again almost immediately instead of accumulating backlog, but never
/// spin.
const MIN_DELAY: Duration = Duration::from_millis(1);

/// Long-lived refresh loop keeping the directory cache fresh.
///
/// Pacing is adaptive: the next cycle is scheduled `interval - elapsed`
/// after the previous one finished. Cycle errors are logged and non-fatal;
/// the cache keeps serving its previous snapshot. Cancellation stops the
/// loop at the next iteration without cutting an in-flight cycle short.
pub struct DirectorySyncJob {
    cache: Arc<dyn DirectoryCachePort>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl DirectorySyncJob {
    pub fn new(cache: Arc<dyn DirectoryCachePort>) -> Self {
        Self {
            cache,
            interval_secs: DEFAULT_INTERVAL_SECS,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval_secs: u64) -> Self {
        self.interval_secs = interval_secs;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        info!(
            interval_secs = self.interval_secs,
            "Starting directory sync job"
        );

        tokio::spawn(async move {
            let interval = Duration::from_secs(self.interval_secs);
            let mut delay = interval;
            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("DirectorySyncJob: shutting down");
                        break;
                    }
                    _ = tokio::time::sleep(delay) => {
                        let started = Instant::now();
                        match self.cache.run_refresh_cycle().await {
                            Ok(outcome) if outcome.connected => {
                                debug!(
                                    services = outcome.services,
                                    skipped = outcome.skipped,
                                    "Directory refresh cycle completed"
                                );
                            }
                            Ok(_) => {
                                debug!("Store not connected yet, snapshot unchanged");
                            }
                            Err(e) => {
                                error!(error = %e, "Directory refresh failed, serving stale snapshot");
                            }
                        }
                        delay = next_delay(interval, started.elapsed());
                    }
                }
            }
        });
    }
}

fn next_delay(interval: Duration, elapsed: Duration) -> Duration {
    if elapsed >= interval {
        MIN_DELAY
    } else {
        interval - elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_delay_subtracts_cycle_time() {
        let interval = Duration::from_secs(5);
        assert_eq!(
            next_delay(interval, Duration::from_secs(2)),
            Duration::from_secs(3)
        );
    }

    #[test]
    fn overrun_cycles_rearm_almost_immediately() {
        let interval = Duration::from_secs(5);
        assert_eq!(next_delay(interval, Duration::from_secs(5)), MIN_DELAY);
        assert_eq!(next_delay(interval, Duration::from_secs(60)), MIN_DELAY);
        assert!(next_delay(interval, Duration::from_secs(60)) > Duration::ZERO);
    }
}
