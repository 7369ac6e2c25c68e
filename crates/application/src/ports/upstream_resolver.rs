use async_trait::async_trait;
use relay_dns_domain::{Packet, Question, UpstreamError};

#[async_trait]
pub trait UpstreamResolver: Send + Sync {
    /// Sends `question` alone to the upstream and waits for one reply.
    async fn forward(&self, question: &Question) -> Result<Packet, UpstreamError>;

    /// Human-readable target, used in logs.
    fn server(&self) -> String;
}
