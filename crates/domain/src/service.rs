use std::sync::Arc;

/// One service registered in the mesh control plane.
///
/// Records are immutable once constructed; every refresh cycle rebuilds the
/// full set wholesale instead of mutating records in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceRecord {
    pub name: String,
    pub tenant: String,
    pub egress_port: u16,
}

impl ServiceRecord {
    pub fn new(name: impl Into<String>, tenant: impl Into<String>, egress_port: u16) -> Arc<Self> {
        Arc::new(Self {
            name: name.into(),
            tenant: tenant.into(),
            egress_port,
        })
    }
}
