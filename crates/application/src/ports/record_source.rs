use meshdns_domain::{DomainError, SyntheticService};

/// What the DNS boundary needs from the resolution layer: synthesized
/// answers for a name in a zone, plus the SOA metadata failure responses
/// carry. Synchronous; resolution reads a published snapshot and never
/// waits on I/O.
pub trait RecordSource: Send + Sync {
    fn records(&self, name: &str, zone: &str) -> Result<Vec<SyntheticService>, DomainError>;

    fn serial(&self) -> u32;

    fn min_ttl(&self) -> u32;
}
