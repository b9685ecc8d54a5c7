use async_trait::async_trait;
use meshdns_domain::DomainError;

/// What one refresh cycle did, for job-level logging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefreshOutcome {
    /// False while the store client has not been established; the prior
    /// snapshot is retained untouched in that case.
    pub connected: bool,
    /// Services published in the new snapshot.
    pub services: usize,
    /// Registration documents skipped because they failed to decode.
    pub skipped: usize,
}

/// Mutating surface of the directory cache, driven by the background jobs.
/// Query-path readers go through `ServiceDirectory` instead.
#[async_trait]
pub trait DirectoryCachePort: Send + Sync {
    fn is_connected(&self) -> bool;

    /// One store connection attempt. Errors are reported, never fatal; the
    /// connect job keeps calling until [`Self::is_connected`] turns true.
    async fn connect_store(&self) -> Result<(), DomainError>;

    /// Scan the store and atomically publish a fresh snapshot. On error the
    /// previous snapshot stays visible (stale-but-valid beats no data).
    async fn run_refresh_cycle(&self) -> Result<RefreshOutcome, DomainError>;
}
