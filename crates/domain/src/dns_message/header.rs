use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed 12-byte message header (RFC 1035 §4.1.1).
///
/// The four counts hold whatever was read off the wire. When a packet is
/// encoded they are recomputed from the section lengths.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub id: u16,
    pub qr: bool,
    /// 4 bits.
    pub opcode: u8,
    pub aa: bool,
    pub tc: bool,
    pub rd: bool,
    pub ra: bool,
    /// 3 reserved bits.
    pub z: u8,
    /// 4 bits.
    pub rcode: u8,
    pub qdcount: u16,
    pub ancount: u16,
    pub nscount: u16,
    pub arcount: u16,
}

impl Header {
    /// Header for a single-question recursive query.
    pub fn query(id: u16) -> Self {
        Self {
            id,
            rd: true,
            qdcount: 1,
            ..Self::default()
        }
    }

    /// Response header answering `request`: id, opcode and rd are mirrored.
    pub fn response_to(request: &Header) -> Self {
        Self {
            id: request.id,
            qr: true,
            opcode: request.opcode,
            rd: request.rd,
            ra: true,
            ..Self::default()
        }
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "id={} qr={} opcode={} aa={} tc={} rd={} ra={} z={} rcode={} qd={} an={} ns={} ar={}",
            self.id,
            self.qr as u8,
            self.opcode,
            self.aa as u8,
            self.tc as u8,
            self.rd as u8,
            self.ra as u8,
            self.z,
            self.rcode,
            self.qdcount,
            self.ancount,
            self.nscount,
            self.arcount
        )
    }
}
