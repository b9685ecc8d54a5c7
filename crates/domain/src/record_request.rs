use crate::errors::DomainError;
use std::fmt;

/// Discriminator for the next-to-last label of a mesh query name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PodOrSvc {
    Pod,
    Svc,
}

impl PodOrSvc {
    pub fn as_str(&self) -> &'static str {
        match self {
            PodOrSvc::Pod => "pod",
            PodOrSvc::Svc => "svc",
        }
    }
}

/// A decomposed DNS query name, filled right to left from the label grammar
/// `[_port._protocol | endpoint.] service.namespace.{pod|svc}.<zone>`.
///
/// A short name is valid, just under-specified: parsing stops early and the
/// remaining fields keep their neutral values. Apex queries (`<zone>`,
/// `svc.<zone>`, `pod.<zone>`) produce the all-neutral value, which lets the
/// caller answer NODATA rather than NXDOMAIN.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordRequest {
    /// Named port from an SRV-style name, `*` when unspecified.
    pub port: String,
    /// `tcp`/`udp` from an SRV-style name, `*` when unspecified.
    pub protocol: String,
    /// Endpoint label, empty when absent.
    pub endpoint: String,
    /// Mesh service name.
    pub service: String,
    /// Namespace label (kept for grammar compatibility, ignored on lookup).
    pub namespace: String,
    /// `None` only for apex queries, where no label was consumed.
    pub pod_or_svc: Option<PodOrSvc>,
}

impl fmt::Display for RecordRequest {
    /// All fields joined with dots, mostly for test assertions.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}.{}.{}",
            self.port,
            self.protocol,
            self.endpoint,
            self.service,
            self.namespace,
            self.pod_or_svc.map(|p| p.as_str()).unwrap_or("")
        )
    }
}

/// Decompose `name` (a query name inside `zone`) into a [`RecordRequest`].
///
/// Three well-formed shapes exist:
/// 1. `_port._protocol.service.namespace.pod|svc.zone`
/// 2. `endpoint.service.namespace.pod|svc.zone`
/// 3. `service.namespace.pod|svc.zone`
///
/// Anything with a different trailing label, or with more labels than shape 1,
/// is not this naming scheme and fails with [`DomainError::KeyNotFound`] so
/// the caller can delegate instead of answering authoritatively.
pub fn parse_request(name: &str, zone: &str) -> Result<RecordRequest, DomainError> {
    let base = trim_zone(name, zone)?;

    // Apex queries return the neutral request: NODATA, not NXDOMAIN.
    let mut r = RecordRequest::default();
    if base.is_empty() || base == "svc" || base == "pod" {
        return Ok(r);
    }

    r.port = "*".to_string();
    r.protocol = "*".to_string();

    let segs: Vec<&str> = base.split('.').filter(|s| !s.is_empty()).collect();

    // Consume from the right: pod|svc, then namespace, then service, then
    // whatever the leftover count disambiguates.
    let mut last = segs.len() as isize - 1;
    if last < 0 {
        return Ok(r);
    }
    r.pod_or_svc = match segs[last as usize] {
        "pod" => Some(PodOrSvc::Pod),
        "svc" => Some(PodOrSvc::Svc),
        _ => return Err(DomainError::KeyNotFound),
    };
    last -= 1;
    if last < 0 {
        return Ok(r);
    }

    r.namespace = segs[last as usize].to_string();
    last -= 1;
    if last < 0 {
        return Ok(r);
    }

    r.service = segs[last as usize].to_string();
    last -= 1;
    if last < 0 {
        return Ok(r);
    }

    match last {
        // One leftover label is an endpoint.
        0 => r.endpoint = segs[0].to_string(),
        // Two are protocol and port, closest to the service first.
        1 => {
            r.protocol = strip_underscore(segs[1]).to_string();
            r.port = strip_underscore(segs[0]).to_string();
        }
        // Longer names have no grammar left; too specific to answer.
        _ => return Err(DomainError::KeyNotFound),
    }

    Ok(r)
}

/// Strip the zone suffix off `name`, ignoring case and trailing dots.
fn trim_zone<'a>(name: &'a str, zone: &str) -> Result<&'a str, DomainError> {
    let name = name.trim_end_matches('.');
    let zone = zone.trim_matches('.');
    if zone.is_empty() {
        return Ok(name);
    }
    if name.len() == zone.len() && name.eq_ignore_ascii_case(zone) {
        return Ok("");
    }
    if name.len() > zone.len() {
        let cut = name.len() - zone.len() - 1;
        if name.as_bytes()[cut] == b'.' && name[cut + 1..].eq_ignore_ascii_case(zone) {
            return Ok(&name[..cut]);
        }
    }
    Err(DomainError::KeyNotFound)
}

fn strip_underscore(s: &str) -> &str {
    s.strip_prefix('_').unwrap_or(s)
}

/// Whether `s` is one of the wildcard tokens, `*` or `any`.
pub fn is_wildcard(s: &str) -> bool {
    s == "*" || s == "any"
}

/// Wildcard-aware, case-insensitive equality between two name segments.
pub fn segment_matches(a: &str, b: &str) -> bool {
    is_wildcard(a) || is_wildcard(b) || a.eq_ignore_ascii_case(b)
}
