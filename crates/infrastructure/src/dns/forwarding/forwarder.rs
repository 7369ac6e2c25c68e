use super::message_builder::MessageBuilder;
use super::response_parser::ResponseParser;
use crate::dns::transport::UdpTransport;
use async_trait::async_trait;
use relay_dns_application::ports::UpstreamResolver;
use relay_dns_domain::{Packet, Question, UpstreamAddr, UpstreamError};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::lookup_host;
use tracing::debug;

/// Forwards single questions to one upstream over UDP.
///
/// Hostname upstreams are resolved again for every query.
pub struct UdpForwarder {
    upstream: UpstreamAddr,
    timeout: Duration,
}

impl UdpForwarder {
    pub fn new(upstream: UpstreamAddr, timeout: Duration) -> Self {
        Self { upstream, timeout }
    }

    async fn resolve_target(&self) -> Result<SocketAddr, UpstreamError> {
        let (hostname, port) = match &self.upstream {
            UpstreamAddr::Resolved(addr) => return Ok(*addr),
            UpstreamAddr::Unresolved { hostname, port } => (hostname.as_ref(), *port),
        };

        let lookup = tokio::time::timeout(self.timeout, lookup_host((hostname, port)))
            .await
            .map_err(|_| UpstreamError::Timeout {
                server: self.upstream.to_string(),
            })?;

        let mut addrs = lookup.map_err(|e| UpstreamError::Network {
            server: self.upstream.to_string(),
            reason: format!("failed to resolve upstream host: {}", e),
        })?;

        addrs.next().ok_or_else(|| UpstreamError::Network {
            server: self.upstream.to_string(),
            reason: "upstream host resolved to no addresses".to_string(),
        })
    }
}

#[async_trait]
impl UpstreamResolver for UdpForwarder {
    async fn forward(&self, question: &Question) -> Result<Packet, UpstreamError> {
        let (id, request_bytes) =
            MessageBuilder::build_query(question).map_err(|e| UpstreamError::Decode {
                server: self.upstream.to_string(),
                reason: format!("cannot encode question {}: {}", question, e),
            })?;

        let target = self.resolve_target().await?;
        debug!(
            upstream = %self.upstream,
            target = %target,
            id = id,
            question = %question,
            "Forwarding question"
        );

        let transport = UdpTransport::new(target);
        let response = transport.send(&request_bytes, self.timeout).await?;

        ResponseParser::parse(&response, id, &self.upstream.to_string())
    }

    fn server(&self) -> String {
        self.upstream.to_string()
    }
}
