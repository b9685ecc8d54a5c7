//! MeshDNS Infrastructure Layer
pub mod directory;
pub mod dns;
pub mod store;
