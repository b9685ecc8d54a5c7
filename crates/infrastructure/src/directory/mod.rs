mod cache;
mod snapshot;
mod spec_doc;

pub use cache::DirectoryCache;
pub use snapshot::DirectorySnapshot;
