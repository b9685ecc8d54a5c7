use super::spec_doc;
use meshdns_domain::ServiceRecord;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::warn;

/// Immutable pairing of the full service list and its name index.
///
/// The map is derived entirely from the list; both are built together and
/// published as one unit, so readers never see them disagree.
#[derive(Debug, Default)]
pub struct DirectorySnapshot {
    pub services: Vec<Arc<ServiceRecord>>,
    pub by_name: HashMap<String, Arc<ServiceRecord>>,
}

impl DirectorySnapshot {
    /// Build a snapshot from raw registration documents. Documents that fail
    /// to decode are skipped, never fatal; the skip count is returned for
    /// the refresh outcome.
    pub fn from_documents(docs: &[String]) -> (Self, usize) {
        let mut snapshot = Self::default();
        let mut skipped = 0;
        for doc in docs {
            match spec_doc::decode(doc) {
                Ok(record) => {
                    let record = Arc::new(record);
                    snapshot
                        .by_name
                        .insert(record.name.clone(), Arc::clone(&record));
                    snapshot.services.push(record);
                }
                Err(e) => {
                    warn!(error = %e, "Skipping undecodable service spec");
                    skipped += 1;
                }
            }
        }
        (snapshot, skipped)
    }
}
