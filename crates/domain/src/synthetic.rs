use std::net::IpAddr;

/// Fake top-level segment of synthesized registry keys, standing in for the
/// key namespace a shared store would use.
pub const REGISTRY_PREFIX: &str = "c";

/// One synthesized DNS answer: a loopback host, the service's egress port,
/// the zone TTL, and a path-like key downstream consumers use as a canonical
/// service identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntheticService {
    pub host: IpAddr,
    pub port: u16,
    pub ttl: u32,
    pub key: String,
}

/// Registry path of a zone: labels reversed and slash-joined under the
/// [`REGISTRY_PREFIX`], e.g. `interwebs.test.` becomes `/c/test/interwebs`.
pub fn zone_registry_path(zone: &str) -> String {
    let mut labels: Vec<&str> = zone
        .trim_matches('.')
        .split('.')
        .filter(|s| !s.is_empty())
        .collect();
    labels.reverse();
    if labels.is_empty() {
        return format!("/{REGISTRY_PREFIX}");
    }
    format!("/{REGISTRY_PREFIX}/{}", labels.join("/"))
}

/// Canonical key for a service inside a zone:
/// `<zone path>/svc/<namespace>/<service>`.
pub fn service_key(zone: &str, namespace: &str, service: &str) -> String {
    [zone_registry_path(zone).as_str(), "svc", namespace, service].join("/")
}
