use crate::dns::wire::{decode_packet, encode_packet, WireError, MAX_UDP_PAYLOAD};
use relay_dns_application::use_cases::ResolveQueryUseCase;
use relay_dns_domain::{Header, Packet};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Turns one inbound datagram into one reply datagram.
pub struct DnsServerHandler {
    use_case: Arc<ResolveQueryUseCase>,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<ResolveQueryUseCase>) -> Self {
        Self { use_case }
    }

    /// Returns the encoded reply, or `None` when the datagram is dropped.
    pub async fn handle_datagram(&self, datagram: &[u8], client: SocketAddr) -> Option<Vec<u8>> {
        let request = match decode_packet(datagram) {
            Ok(packet) => packet,
            Err(e) => {
                warn!(
                    client = %client,
                    bytes = datagram.len(),
                    error = %e,
                    "Dropping malformed datagram"
                );
                return None;
            }
        };

        debug!(client = %client, header = %request.header, "DNS request received");
        for question in &request.questions {
            debug!(client = %client, question = %question, "Question");
        }

        let resolution = self.use_case.execute(&request).await;

        info!(
            client = %client,
            id = request.header.id,
            questions = request.questions.len(),
            answers = resolution.response.answers.len(),
            cache_hits = resolution.cache_hits(),
            skipped = resolution.skipped().count(),
            "DNS request answered"
        );
        for record in &resolution.response.answers {
            debug!(client = %client, record = %record, "Answer");
        }

        match encode_response(&resolution.response) {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                warn!(client = %client, error = %e, "Failed to encode response");
                None
            }
        }
    }

    /// Writes the cache snapshot. Failures are logged, never fatal.
    pub fn persist_cache(&self) {
        if let Err(e) = self.use_case.persist_cache() {
            error!(error = %e, "Failed to persist cache");
        }
    }
}

/// Encodes `response`, falling back to a truncated reply (tc=1, no records)
/// when it does not fit a classic UDP payload.
pub fn encode_response(response: &Packet) -> Result<Vec<u8>, WireError> {
    let bytes = encode_packet(response)?;
    if bytes.len() <= MAX_UDP_PAYLOAD {
        return Ok(bytes);
    }

    debug!(
        bytes = bytes.len(),
        limit = MAX_UDP_PAYLOAD,
        "Response too large, sending truncated reply"
    );

    let mut truncated = Packet {
        header: Header {
            tc: true,
            ..response.header
        },
        questions: response.questions.clone(),
        ..Packet::default()
    };
    let bytes = encode_packet(&truncated)?;
    if bytes.len() <= MAX_UDP_PAYLOAD {
        return Ok(bytes);
    }

    truncated.questions.clear();
    encode_packet(&truncated)
}
