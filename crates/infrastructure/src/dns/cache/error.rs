use relay_dns_domain::DomainError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CacheError {
    #[error("failed to read cache snapshot {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write cache snapshot {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("corrupt cache snapshot {}: {source}", path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid cache key {key:?} in {}: {source}", path.display())]
    InvalidKey {
        path: PathBuf,
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize cache snapshot: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl From<CacheError> for DomainError {
    fn from(err: CacheError) -> Self {
        DomainError::CacheStore(err.to_string())
    }
}
