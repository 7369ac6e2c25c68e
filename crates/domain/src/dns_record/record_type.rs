use serde::{Deserialize, Serialize};
use std::fmt;

/// Record types understood by the codec.
///
/// Anything else decodes into `Unsupported` with the raw code so the rdata is
/// carried as opaque bytes instead of being guessed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u16", into = "u16")]
pub enum RecordType {
    A,
    NS,
    CNAME,
    AAAA,
    Unsupported(u16),
}

impl RecordType {
    pub fn to_u16(&self) -> u16 {
        match self {
            RecordType::A => 1,
            RecordType::NS => 2,
            RecordType::CNAME => 5,
            RecordType::AAAA => 28,
            RecordType::Unsupported(code) => *code,
        }
    }

    pub fn from_u16(code: u16) -> Self {
        match code {
            1 => RecordType::A,
            2 => RecordType::NS,
            5 => RecordType::CNAME,
            28 => RecordType::AAAA,
            other => RecordType::Unsupported(other),
        }
    }

    /// Types whose rdata is a single domain name.
    pub fn is_name_shaped(&self) -> bool {
        matches!(self, RecordType::NS | RecordType::CNAME)
    }
}

impl From<u16> for RecordType {
    fn from(code: u16) -> Self {
        RecordType::from_u16(code)
    }
}

impl From<RecordType> for u16 {
    fn from(record_type: RecordType) -> Self {
        record_type.to_u16()
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordType::A => f.write_str("A"),
            RecordType::NS => f.write_str("NS"),
            RecordType::CNAME => f.write_str("CNAME"),
            RecordType::AAAA => f.write_str("AAAA"),
            RecordType::Unsupported(code) => write!(f, "TYPE{}", code),
        }
    }
}

