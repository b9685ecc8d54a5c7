//! MeshDNS background jobs: store connection bootstrap and the periodic
//! directory refresh loop.
mod directory_sync;
mod store_connect;

pub use directory_sync::DirectorySyncJob;
pub use store_connect::StoreConnectJob;
