use meshdns_domain::ServiceRecord;
use std::sync::Arc;

/// Read-only view over the cached service directory.
///
/// Both operations are wait-free snapshot reads: they are called on the query
/// path for every incoming request and must never block on a refresh.
pub trait ServiceDirectory: Send + Sync {
    /// Every service in the current snapshot, in registration-key order.
    /// Empty while the cache has not warmed up.
    fn list_services(&self) -> Vec<Arc<ServiceRecord>>;

    /// Services whose name matches exactly. No fuzzy or case-insensitive
    /// matching.
    fn service_by_name(&self, name: &str) -> Vec<Arc<ServiceRecord>>;
}
