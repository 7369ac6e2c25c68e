//! relay-dns domain layer
pub mod config;
pub mod dns_message;
pub mod dns_record;
pub mod errors;
pub mod upstream;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_message::{Header, Packet, Question};
pub use dns_record::{RData, RecordClass, RecordType, ResourceRecord};
pub use errors::{DomainError, UpstreamError};
pub use upstream::UpstreamAddr;
