use crate::ports::{RecordSource, ServiceDirectory};
use meshdns_domain::{
    is_wildcard, parse_request, service_key, DomainError, PodOrSvc, ServiceRecord,
    SyntheticService,
};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::sync::Arc;

const LOOPBACK_V4: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
const LOOPBACK_V6: IpAddr = IpAddr::V6(Ipv6Addr::LOCALHOST);

/// Turns a query name inside an authoritative zone into synthesized service
/// answers, plus the SOA metadata the handler needs for failure responses.
///
/// Traffic for a mesh service is reached through the local sidecar, so every
/// answer points at loopback with the service's registered egress port.
pub struct ResolveServiceUseCase {
    directory: Arc<dyn ServiceDirectory>,
    ttl: u32,
}

impl ResolveServiceUseCase {
    pub fn new(directory: Arc<dyn ServiceDirectory>, ttl: u32) -> Self {
        Self { directory, ttl }
    }

    /// Resolve `name` within `zone`.
    ///
    /// Name errors (`RequestInvalid`, `PodRequest`, `KeyNotFound`) mean "not
    /// ours to answer" and are handled by delegation, never as failures.
    pub fn records(&self, name: &str, zone: &str) -> Result<Vec<SyntheticService>, DomainError> {
        let request = parse_request(name, zone).map_err(|_| DomainError::RequestInvalid)?;

        if request.pod_or_svc == Some(PodOrSvc::Pod) {
            return Err(DomainError::PodRequest);
        }
        // Apex and under-specified names land here with an empty service.
        if request.service.is_empty() {
            return Err(DomainError::KeyNotFound);
        }
        if is_wildcard(&request.service) {
            return Err(DomainError::KeyNotFound);
        }

        let matches = self.directory.service_by_name(&request.service);
        if matches.is_empty() {
            return Err(DomainError::KeyNotFound);
        }

        // The namespace label is part of the key but not of the lookup; a
        // wildcard namespace resolves on the service name alone.
        let key = service_key(zone, &request.namespace, &request.service);
        Ok(sidecar_services(&matches, &key, self.ttl))
    }

    /// SOA serial: wall-clock seconds. Coarse, but the directory refreshes
    /// often enough that time-based serials track zone changes.
    pub fn serial(&self) -> u32 {
        chrono::Utc::now().timestamp() as u32
    }

    /// Minimum TTL for the zone SOA, from configuration.
    pub fn min_ttl(&self) -> u32 {
        self.ttl
    }
}

impl RecordSource for ResolveServiceUseCase {
    fn records(&self, name: &str, zone: &str) -> Result<Vec<SyntheticService>, DomainError> {
        ResolveServiceUseCase::records(self, name, zone)
    }

    fn serial(&self) -> u32 {
        ResolveServiceUseCase::serial(self)
    }

    fn min_ttl(&self) -> u32 {
        ResolveServiceUseCase::min_ttl(self)
    }
}

/// One IPv4 and one IPv6 loopback answer per matching registration,
/// collapsed over identical (host, port, TTL) triples.
fn sidecar_services(
    records: &[Arc<ServiceRecord>],
    key: &str,
    ttl: u32,
) -> Vec<SyntheticService> {
    let mut results: Vec<SyntheticService> = Vec::with_capacity(records.len() * 2);
    for record in records {
        for host in [LOOPBACK_V4, LOOPBACK_V6] {
            let duplicate = results
                .iter()
                .any(|s| s.host == host && s.port == record.egress_port && s.ttl == ttl);
            if duplicate {
                continue;
            }
            results.push(SyntheticService {
                host,
                port: record.egress_port,
                ttl,
                key: key.to_string(),
            });
        }
    }
    results
}
