use hickory_proto::rr::rdata::{A, AAAA, SOA, SRV};
use hickory_proto::rr::{Name, RData, Record};
use meshdns_domain::SyntheticService;
use std::net::IpAddr;
use std::str::FromStr;

/// Longest configured zone that is a label-aligned suffix of `name`.
/// Zones are stored lowercased with a trailing dot.
pub fn matching_zone<'a>(name: &str, zones: &'a [String]) -> Option<&'a str> {
    let name = name.to_ascii_lowercase();
    let name = name.trim_end_matches('.');

    let mut best: Option<&'a str> = None;
    for zone in zones {
        let z = zone.trim_end_matches('.');
        let matches = name.len() == z.len() && name == z
            || name.len() > z.len()
                && name.as_bytes()[name.len() - z.len() - 1] == b'.'
                && name.ends_with(z);
        if matches && best.map_or(true, |b| zone.len() > b.len()) {
            best = Some(zone);
        }
    }
    best
}

/// Turn a registry key back into a domain name: drop the fake prefix
/// segment, reverse the rest, join with dots.
/// `/c/test/interwebs/svc/spring-petclinic/vets-service` becomes
/// `vets-service.spring-petclinic.svc.interwebs.test.`
pub fn domain_from_key(key: &str) -> String {
    let mut labels: Vec<&str> = key.split('/').filter(|s| !s.is_empty()).skip(1).collect();
    labels.reverse();
    let mut domain = labels.join(".");
    domain.push('.');
    domain
}

pub fn name_or_root(name: &str) -> Name {
    Name::from_str(name).unwrap_or_else(|_| Name::root())
}

/// A or AAAA record for one synthesized answer, by address family.
pub fn address_record(name: &Name, service: &SyntheticService) -> Record {
    let rdata = match service.host {
        IpAddr::V4(ipv4) => RData::A(A(ipv4)),
        IpAddr::V6(ipv6) => RData::AAAA(AAAA(ipv6)),
    };
    Record::from_rdata(name.clone(), service.ttl, rdata)
}

pub fn srv_record(name: &Name, target: Name, service: &SyntheticService, weight: u16) -> Record {
    Record::from_rdata(
        name.clone(),
        service.ttl,
        RData::SRV(SRV::new(10, weight, service.port, target)),
    )
}

/// Zone SOA attached to server-failure responses so resolvers get correct
/// negative-caching metadata.
pub fn soa_record(zone: &Name, serial: u32, min_ttl: u32) -> Record {
    let mname = name_or_root("ns.dns").append_domain(zone).unwrap_or_else(|_| zone.clone());
    let rname = name_or_root("hostmaster").append_domain(zone).unwrap_or_else(|_| zone.clone());
    Record::from_rdata(
        zone.clone(),
        min_ttl,
        RData::SOA(SOA::new(mname, rname, serial, 7200, 1800, 86400, min_ttl)),
    )
}
