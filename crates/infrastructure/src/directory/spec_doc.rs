use meshdns_domain::{DomainError, ServiceRecord};
use serde::Deserialize;

/// Shape of one service-registration document as the control plane stores
/// it. Only the fields the resolver needs are decoded.
#[derive(Debug, Deserialize)]
struct ServiceSpecDoc {
    name: String,

    #[serde(default, rename = "registerTenant")]
    register_tenant: Option<String>,

    sidecar: SidecarSpec,
}

#[derive(Debug, Deserialize)]
struct SidecarSpec {
    #[serde(rename = "egressPort")]
    egress_port: u16,
}

pub fn decode(doc: &str) -> Result<ServiceRecord, DomainError> {
    let spec: ServiceSpecDoc =
        serde_yaml::from_str(doc).map_err(|e| DomainError::SpecDecode(e.to_string()))?;
    if spec.name.is_empty() {
        return Err(DomainError::SpecDecode("service name is empty".to_string()));
    }
    Ok(ServiceRecord {
        name: spec.name,
        tenant: spec.register_tenant.unwrap_or_default(),
        egress_port: spec.sidecar.egress_port,
    })
}
