mod directory_cache_port;
mod record_source;
mod service_directory;
mod service_spec_source;

pub use directory_cache_port::{DirectoryCachePort, RefreshOutcome};
pub use record_source::RecordSource;
pub use service_directory::ServiceDirectory;
pub use service_spec_source::ServiceSpecSource;
