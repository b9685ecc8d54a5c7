use crate::dns::records;
use hickory_proto::op::{Header, ResponseCode};
use hickory_proto::rr::{Name, Record, RecordType};
use hickory_server::authority::MessageResponseBuilder;
use hickory_server::server::{Request, RequestHandler, ResponseHandler, ResponseInfo};
use meshdns_application::ports::RecordSource;
use meshdns_domain::SyntheticService;
use std::sync::Arc;
use tracing::{debug, error};

/// DNS handler answering for the configured mesh zones, delegating
/// everything else to the next handler in the chain.
///
/// Per query the state machine is: zone match -> dispatch by type ->
/// one of passthrough (name error, foreign type, empty result),
/// SERVFAIL (backend error), or an authoritative answer.
pub struct MeshServiceHandler<N: RequestHandler> {
    resolver: Arc<dyn RecordSource>,
    zones: Vec<String>,
    next: N,
}

impl<N: RequestHandler> MeshServiceHandler<N> {
    pub fn new(resolver: Arc<dyn RecordSource>, zones: Vec<String>, next: N) -> Self {
        Self {
            resolver,
            zones,
            next,
        }
    }
}

#[async_trait::async_trait]
impl<N: RequestHandler> RequestHandler for MeshServiceHandler<N> {
    async fn handle_request<R: ResponseHandler>(
        &self,
        request: &Request,
        mut response_handle: R,
    ) -> ResponseInfo {
        let request_info = match request.request_info() {
            Ok(info) => info,
            Err(e) => {
                error!(error = %e, "Failed to parse request info");
                return send_error_response(request, &mut response_handle, ResponseCode::FormErr)
                    .await;
            }
        };

        let query = &request_info.query;
        let qname = query.name().to_string();
        let qtype = query.query_type();

        // Not one of our zones: not ours to answer.
        let Some(zone) = records::matching_zone(&qname, &self.zones) else {
            return self.next.handle_request(request, response_handle).await;
        };
        let zone = zone.to_string();

        // Only address and service queries are synthesized; every other
        // type belongs to whoever comes after us in the chain.
        if !matches!(qtype, RecordType::A | RecordType::AAAA | RecordType::SRV) {
            debug!(name = %qname, record_type = ?qtype, "Unhandled query type, delegating");
            return self.next.handle_request(request, response_handle).await;
        }

        let services = match self.resolver.records(&qname, &zone) {
            Ok(services) => services,
            Err(e) if e.is_name_error() => {
                debug!(name = %qname, record_type = ?qtype, error = %e, "Name error, delegating");
                return self.next.handle_request(request, response_handle).await;
            }
            Err(e) => {
                error!(name = %qname, record_type = ?qtype, error = %e, "Backend failure");
                return self
                    .send_backend_failure(request, &mut response_handle, &zone)
                    .await;
            }
        };

        let name = records::name_or_root(&qname);
        let (answers, extras) = assemble_answers(&name, qtype, &services);

        // Zero records for a name we could parse still delegates; the next
        // handler may know the name even though the directory does not.
        if answers.is_empty() {
            debug!(name = %qname, record_type = ?qtype, "No records, delegating");
            return self.next.handle_request(request, response_handle).await;
        }

        let mut header = Header::response_from_request(request.header());
        header.set_authoritative(true);
        header.set_recursion_available(false);

        let builder = MessageResponseBuilder::from_message_request(request);
        let response = builder.build(header, answers.iter(), &[], &[], extras.iter());

        debug!(name = %qname, record_type = ?qtype, answers = answers.len(), "Answering authoritatively");
        match response_handle.send_response(response).await {
            Ok(info) => info,
            Err(e) => {
                error!(error = %e, "Failed to send response");
                ResponseInfo::from(*request.header())
            }
        }
    }
}

impl<N: RequestHandler> MeshServiceHandler<N> {
    /// SERVFAIL for the zone, carrying the zone SOA in the authority section
    /// so resolvers get negative-caching metadata.
    async fn send_backend_failure<R: ResponseHandler>(
        &self,
        request: &Request,
        response_handle: &mut R,
        zone: &str,
    ) -> ResponseInfo {
        let zone_name = records::name_or_root(zone);
        let soa = [records::soa_record(
            &zone_name,
            self.resolver.serial(),
            self.resolver.min_ttl(),
        )];

        let mut header = Header::response_from_request(request.header());
        header.set_response_code(ResponseCode::ServFail);
        header.set_recursion_available(false);

        let builder = MessageResponseBuilder::from_message_request(request);
        let response = builder.build(header, &[], &[], soa.iter(), &[]);

        match response_handle.send_response(response).await {
            Ok(info) => info,
            Err(e) => {
                error!(error = %e, "Failed to send SERVFAIL response");
                ResponseInfo::from(*request.header())
            }
        }
    }
}

/// Answer and additional sections for the query type.
///
/// A/AAAA answers carry the loopback addresses of the matching family. SRV
/// answers point at the canonical service name derived from the registry
/// key, with that name's addresses as extras.
fn assemble_answers(
    name: &Name,
    qtype: RecordType,
    services: &[SyntheticService],
) -> (Vec<Record>, Vec<Record>) {
    let mut answers = Vec::new();
    let mut extras = Vec::new();

    match qtype {
        RecordType::A => {
            for s in services.iter().filter(|s| s.host.is_ipv4()) {
                answers.push(records::address_record(name, s));
            }
        }
        RecordType::AAAA => {
            for s in services.iter().filter(|s| s.host.is_ipv6()) {
                answers.push(records::address_record(name, s));
            }
        }
        RecordType::SRV => {
            let weight = (100 / services.len().max(1)).max(1) as u16;
            let mut seen: Vec<(String, u16)> = Vec::new();
            for s in services {
                let target = records::domain_from_key(&s.key);
                if !seen.contains(&(target.clone(), s.port)) {
                    seen.push((target.clone(), s.port));
                    answers.push(records::srv_record(
                        name,
                        records::name_or_root(&target),
                        s,
                        weight,
                    ));
                }
                let target_name = records::name_or_root(&target);
                extras.push(records::address_record(&target_name, s));
            }
        }
        _ => {}
    }

    (answers, extras)
}

/// Terminal element of the handler chain: with no later handler configured,
/// anything delegated this far is refused.
#[derive(Clone, Copy, Default)]
pub struct ChainEnd;

#[async_trait::async_trait]
impl RequestHandler for ChainEnd {
    async fn handle_request<R: ResponseHandler>(
        &self,
        request: &Request,
        mut response_handle: R,
    ) -> ResponseInfo {
        send_error_response(request, &mut response_handle, ResponseCode::Refused).await
    }
}

async fn send_error_response<R: ResponseHandler>(
    request: &Request,
    response_handle: &mut R,
    code: ResponseCode,
) -> ResponseInfo {
    let mut header = Header::response_from_request(request.header());
    header.set_response_code(code);
    let builder = MessageResponseBuilder::from_message_request(request);
    let response = builder.build(header, &[], &[], &[], &[]);

    match response_handle.send_response(response).await {
        Ok(info) => info,
        Err(e) => {
            error!(error = %e, "Failed to send error response");
            ResponseInfo::from(*request.header())
        }
    }
}
