use crate::dns::wire::decode_packet;
use relay_dns_domain::{Packet, UpstreamError};
use tracing::debug;

pub struct ResponseParser;

impl ResponseParser {
    /// Decodes an upstream reply and checks it answers query `expected_id`.
    pub fn parse(
        response_bytes: &[u8],
        expected_id: u16,
        server: &str,
    ) -> Result<Packet, UpstreamError> {
        let packet = decode_packet(response_bytes).map_err(|e| UpstreamError::Decode {
            server: server.to_string(),
            reason: e.to_string(),
        })?;

        if packet.header.id != expected_id {
            return Err(UpstreamError::Decode {
                server: server.to_string(),
                reason: format!(
                    "response id mismatch: expected {}, got {}",
                    expected_id, packet.header.id
                ),
            });
        }

        debug!(
            server = server,
            rcode = packet.header.rcode,
            answers = packet.answers.len(),
            authority = packet.authority.len(),
            additional = packet.additional.len(),
            "Upstream reply parsed"
        );

        Ok(packet)
    }
}
