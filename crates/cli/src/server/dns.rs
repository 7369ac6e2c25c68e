use relay_dns_infrastructure::dns::wire::MAX_UDP_PAYLOAD;
use relay_dns_infrastructure::dns::DnsServerHandler;
use std::net::SocketAddr;
use tokio::net::UdpSocket;
use tracing::{debug, info, warn};

/// Serves one request at a time: receive, resolve, reply, persist.
pub async fn run_dns_server(bind_addr: SocketAddr, handler: DnsServerHandler) -> anyhow::Result<()> {
    let socket = UdpSocket::bind(bind_addr).await?;
    info!(bind_address = %socket.local_addr()?, "DNS server ready");

    let mut recv_buf = [0u8; MAX_UDP_PAYLOAD];

    loop {
        let (len, from) = match socket.recv_from(&mut recv_buf).await {
            Ok(received) => received,
            Err(e) => {
                warn!(error = %e, "UDP receive failed");
                continue;
            }
        };
        debug!(client = %from, bytes = len, "Datagram received");

        let Some(reply) = handler.handle_datagram(&recv_buf[..len], from).await else {
            continue;
        };

        if let Err(e) = socket.send_to(&reply, from).await {
            warn!(client = %from, error = %e, "Failed to send response");
        }

        handler.persist_cache();
    }
}
