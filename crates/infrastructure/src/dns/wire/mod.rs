//! RFC 1035 wire format.
//!
//! Decoding understands name compression; encoding always writes names in
//! full.

mod error;
mod header;
mod name;
mod packet;
mod question;
mod reader;
mod record;

pub use error::WireError;
pub use header::{decode_header, encode_header, HEADER_LEN};
pub use name::{decode_name, encode_name, MAX_LABEL_LEN, MAX_NAME_LEN, MAX_POINTER_HOPS};
pub use packet::{decode_packet, encode_packet};
pub use question::{decode_question, encode_question};
pub use reader::WireReader;
pub use record::{decode_rdata, decode_record, encode_rdata, encode_record};

/// Classic DNS-over-UDP payload limit (no EDNS0).
pub const MAX_UDP_PAYLOAD: usize = 512;
