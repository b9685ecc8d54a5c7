mod errors;
mod logging;
mod root;
mod server;
mod store;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::Config;
pub use server::ServerConfig;
pub use store::{StoreConfig, StoreTlsConfig};
