use async_trait::async_trait;
use meshdns_domain::DomainError;

/// Raw access to the control-plane store's service-registration key space.
#[async_trait]
pub trait ServiceSpecSource: Send + Sync {
    fn is_connected(&self) -> bool;

    /// One bounded-dial connection attempt. Called repeatedly by the connect
    /// job until [`Self::is_connected`] turns true.
    async fn connect(&self) -> Result<(), DomainError>;

    /// Bounded prefix scan returning the raw service-spec documents.
    /// Fails with [`DomainError::StoreUnavailable`] while disconnected.
    async fn fetch_specs(&self) -> Result<Vec<String>, DomainError>;
}
