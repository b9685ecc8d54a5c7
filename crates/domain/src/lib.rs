//! MeshDNS Domain Layer
pub mod config;
pub mod errors;
pub mod record_request;
pub mod service;
pub mod synthetic;

pub use config::Config;
pub use errors::DomainError;
pub use record_request::{is_wildcard, parse_request, segment_matches, PodOrSvc, RecordRequest};
pub use service::ServiceRecord;
pub use synthetic::{service_key, zone_registry_path, SyntheticService};
