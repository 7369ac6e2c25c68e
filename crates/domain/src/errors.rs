use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Cache store error: {0}")]
    CacheStore(String),
}

/// Why a forwarded question produced no answer.
///
/// Each variant maps to one of the ways a single upstream exchange can fail;
/// none of them abort the client request as a whole.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UpstreamError {
    #[error("Timeout waiting for {server}")]
    Timeout { server: String },

    #[error("Network error talking to {server}: {reason}")]
    Network { server: String, reason: String },

    #[error("Malformed reply from {server}: {reason}")]
    Decode { server: String, reason: String },
}

impl UpstreamError {
    pub fn kind(&self) -> &'static str {
        match self {
            UpstreamError::Timeout { .. } => "timeout",
            UpstreamError::Network { .. } => "network",
            UpstreamError::Decode { .. } => "decode",
        }
    }
}
