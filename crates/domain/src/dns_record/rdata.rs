use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

/// Type-dependent payload of a resource record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum RData {
    /// Zero-length rdata. Never counted or sent as an answer.
    Empty,
    A(Ipv4Addr),
    /// Kept as the 16 raw wire bytes.
    Aaaa([u8; 16]),
    Name(String),
    Opaque(Vec<u8>),
}

impl RData {
    pub fn is_empty(&self) -> bool {
        matches!(self, RData::Empty)
    }

    pub fn as_name(&self) -> Option<&str> {
        match self {
            RData::Name(name) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for RData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RData::Empty => Ok(()),
            RData::A(addr) => write!(f, "{}", addr),
            RData::Aaaa(octets) => write!(f, "{}", Ipv6Addr::from(*octets)),
            RData::Name(name) => f.write_str(name),
            RData::Opaque(bytes) => {
                write!(f, "\\# {}", bytes.len())?;
                for byte in bytes {
                    write!(f, " {:02x}", byte)?;
                }
                Ok(())
            }
        }
    }
}
