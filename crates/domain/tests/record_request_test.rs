use meshdns_domain::{is_wildcard, parse_request, segment_matches, DomainError, PodOrSvc};

const ZONE: &str = "interwebs.test.";

#[test]
fn test_service_name() {
    let r = parse_request("vets-service.spring-petclinic.svc.interwebs.test.", ZONE).unwrap();
    assert_eq!(r.service, "vets-service");
    assert_eq!(r.namespace, "spring-petclinic");
    assert_eq!(r.pod_or_svc, Some(PodOrSvc::Svc));
    assert_eq!(r.endpoint, "");
    assert_eq!(r.port, "*");
    assert_eq!(r.protocol, "*");
    assert_eq!(r.to_string(), "*.*..vets-service.spring-petclinic.svc");
}

#[test]
fn test_srv_style_name() {
    let r = parse_request(
        "_http._tcp.vets-service.spring-petclinic.svc.interwebs.test.",
        ZONE,
    )
    .unwrap();
    assert_eq!(r.port, "http");
    assert_eq!(r.protocol, "tcp");
    assert_eq!(r.service, "vets-service");
    assert_eq!(r.namespace, "spring-petclinic");
    assert_eq!(r.pod_or_svc, Some(PodOrSvc::Svc));
}

#[test]
fn test_endpoint_name() {
    let r = parse_request(
        "vets.vets-service.spring-petclinic.svc.interwebs.test.",
        ZONE,
    )
    .unwrap();
    assert_eq!(r.endpoint, "vets");
    assert_eq!(r.service, "vets-service");
    assert_eq!(r.namespace, "spring-petclinic");
}

#[test]
fn test_pod_name() {
    let r = parse_request("some-pod.spring-petclinic.pod.interwebs.test.", ZONE).unwrap();
    assert_eq!(r.pod_or_svc, Some(PodOrSvc::Pod));
    assert_eq!(r.service, "some-pod");
}

#[test]
fn test_apex_returns_neutral_request() {
    for name in ["interwebs.test.", "svc.interwebs.test.", "pod.interwebs.test."] {
        let r = parse_request(name, ZONE).unwrap();
        assert_eq!(r.pod_or_svc, None, "{name}");
        assert_eq!(r.service, "", "{name}");
        // The neutral request leaves even the port/protocol wildcards unset.
        assert_eq!(r.port, "", "{name}");
        assert_eq!(r.to_string(), ".....", "{name}");
    }
}

#[test]
fn test_under_specified_names_are_valid() {
    // namespace.svc.zone — no service label.
    let r = parse_request("spring-petclinic.svc.interwebs.test.", ZONE).unwrap();
    assert_eq!(r.namespace, "spring-petclinic");
    assert_eq!(r.service, "");
    assert_eq!(r.pod_or_svc, Some(PodOrSvc::Svc));
    assert_eq!(r.port, "*");
}

#[test]
fn test_foreign_naming_scheme_is_key_not_found() {
    let err = parse_request("www.interwebs.test.", ZONE).unwrap_err();
    assert_eq!(err, DomainError::KeyNotFound);

    let err = parse_request("a.b.website.interwebs.test.", ZONE).unwrap_err();
    assert_eq!(err, DomainError::KeyNotFound);
}

#[test]
fn test_too_long_name_is_key_not_found() {
    let err = parse_request(
        "x._http._tcp.vets-service.spring-petclinic.svc.interwebs.test.",
        ZONE,
    )
    .unwrap_err();
    assert_eq!(err, DomainError::KeyNotFound);
}

#[test]
fn test_name_outside_zone_is_key_not_found() {
    let err = parse_request("vets-service.spring-petclinic.svc.other.zone.", ZONE).unwrap_err();
    assert_eq!(err, DomainError::KeyNotFound);
}

#[test]
fn test_parse_is_idempotent() {
    let name = "_http._tcp.vets-service.spring-petclinic.svc.interwebs.test.";
    let a = parse_request(name, ZONE).unwrap();
    let b = parse_request(name, ZONE).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_zone_case_is_ignored() {
    let r = parse_request("vets-service.spring-petclinic.svc.Interwebs.TEST.", ZONE).unwrap();
    assert_eq!(r.service, "vets-service");
}

#[test]
fn test_wildcard_tokens() {
    assert!(is_wildcard("*"));
    assert!(is_wildcard("any"));
    assert!(!is_wildcard("ANY"));
    assert!(!is_wildcard("svc1"));
}

#[test]
fn test_segment_matching() {
    assert!(segment_matches("*", "spring-petclinic"));
    assert!(segment_matches("spring-petclinic", "any"));
    assert!(segment_matches("Spring-Petclinic", "spring-petclinic"));
    assert!(!segment_matches("spring-petclinic", "other-ns"));
}

#[test]
fn test_wildcard_namespace_parses() {
    let r = parse_request("svc1.*.svc.cluster.local.", "cluster.local.").unwrap();
    assert_eq!(r.service, "svc1");
    assert_eq!(r.namespace, "*");
}
