use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Key was not found")]
    KeyNotFound,

    #[error("Request parse error")]
    RequestInvalid,

    #[error("Name is a pod")]
    PodRequest,

    #[error("Directory store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Directory store scan failed: {0}")]
    StoreScan(String),

    #[error("Service spec decode failed: {0}")]
    SpecDecode(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    /// A name error means "not ours to answer": the query handler delegates
    /// to the next handler in the chain instead of failing the query.
    pub fn is_name_error(&self) -> bool {
        matches!(
            self,
            DomainError::KeyNotFound | DomainError::RequestInvalid | DomainError::PodRequest
        )
    }
}
