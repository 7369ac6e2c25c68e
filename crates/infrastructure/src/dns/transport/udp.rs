//! UDP transport for upstream queries (RFC 1035 §4.2.1).
//!
//! Messages are sent as-is. Replies are read into a 512-byte buffer since
//! queries never advertise EDNS(0).

use crate::dns::wire::MAX_UDP_PAYLOAD;
use relay_dns_domain::UpstreamError;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::{debug, warn};

/// One fresh ephemeral socket per exchange.
pub struct UdpTransport {
    server_addr: SocketAddr,
}

impl UdpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    pub fn server_addr(&self) -> SocketAddr {
        self.server_addr
    }

    fn network_error(&self, what: &str, err: std::io::Error) -> UpstreamError {
        UpstreamError::Network {
            server: self.server_addr.to_string(),
            reason: format!("{}: {}", what, err),
        }
    }

    fn timeout_error(&self) -> UpstreamError {
        UpstreamError::Timeout {
            server: self.server_addr.to_string(),
        }
    }

    /// Sends one query and returns the first reply datagram.
    ///
    /// `timeout` applies to the send and to the receive separately.
    pub async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<Vec<u8>, UpstreamError> {
        let bind_addr = if self.server_addr.is_ipv4() {
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
        } else {
            SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| self.network_error("failed to bind UDP socket", e))?;

        let bytes_sent =
            tokio::time::timeout(timeout, socket.send_to(message_bytes, self.server_addr))
                .await
                .map_err(|_| self.timeout_error())?
                .map_err(|e| self.network_error("failed to send query", e))?;

        debug!(
            server = %self.server_addr,
            bytes_sent = bytes_sent,
            "UDP query sent"
        );

        let mut recv_buf = vec![0u8; MAX_UDP_PAYLOAD];

        let (bytes_received, from_addr) =
            tokio::time::timeout(timeout, socket.recv_from(&mut recv_buf))
                .await
                .map_err(|_| self.timeout_error())?
                .map_err(|e| self.network_error("failed to receive reply", e))?;

        if from_addr.ip() != self.server_addr.ip() {
            warn!(
                expected = %self.server_addr,
                received_from = %from_addr,
                "UDP response from unexpected source"
            );
        }

        recv_buf.truncate(bytes_received);

        debug!(
            server = %self.server_addr,
            bytes_received = bytes_received,
            "UDP response received"
        );

        Ok(recv_buf)
    }
}
