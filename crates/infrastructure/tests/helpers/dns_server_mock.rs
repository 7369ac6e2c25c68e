#![allow(dead_code)]
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

/// What the mock upstream does with each query it receives.
#[derive(Debug, Clone, Copy)]
pub enum MockReply {
    /// One A record for the question name, compressed against the question.
    Answer { ttl: u32, addr: Ipv4Addr },
    /// Valid answer whose id does not match the query.
    WrongId,
    /// Bytes that do not parse as a DNS message.
    Garbage,
    /// Never replies.
    Silent,
}

pub struct MockDnsServer {
    addr: SocketAddr,
    queries: Arc<AtomicUsize>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    /// Binds an ephemeral port on 127.0.0.1.
    pub async fn start(reply: MockReply) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = socket.local_addr()?;
        let queries = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&queries);

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            counter.fetch_add(1, Ordering::SeqCst);
                            if let Some(response) = Self::build_mock_response(&buf[..len], reply) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            queries,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Number of datagrams received so far.
    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    fn build_mock_response(query: &[u8], reply: MockReply) -> Option<Vec<u8>> {
        if query.len() < 12 {
            return None;
        }

        let (ttl, addr) = match reply {
            MockReply::Silent => return None,
            MockReply::Garbage => return Some(vec![0xde, 0xad]),
            MockReply::Answer { ttl, addr } => (ttl, addr),
            MockReply::WrongId => (60, Ipv4Addr::new(192, 0, 2, 1)),
        };

        let mut response = Vec::with_capacity(512);

        let id = u16::from_be_bytes([query[0], query[1]]);
        let id = match reply {
            MockReply::WrongId => id.wrapping_add(1),
            _ => id,
        };
        response.extend_from_slice(&id.to_be_bytes());

        // qr, rd / ra
        response.push(0x81);
        response.push(0x80);

        // qdcount copied, one answer
        response.extend_from_slice(&query[4..6]);
        response.extend_from_slice(&[0x00, 0x01]);
        response.extend_from_slice(&[0x00, 0x00]);
        response.extend_from_slice(&[0x00, 0x00]);

        response.extend_from_slice(&query[12..]);

        response.extend_from_slice(&[0xc0, 0x0c, 0x00, 0x01, 0x00, 0x01]);
        response.extend_from_slice(&ttl.to_be_bytes());
        response.extend_from_slice(&[0x00, 0x04]);
        response.extend_from_slice(&addr.octets());

        Some(response)
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
