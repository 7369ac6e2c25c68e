use super::{WireError, WireReader};
use bytes::BufMut;
use relay_dns_domain::Header;

pub const HEADER_LEN: usize = 12;

pub fn encode_header<B: BufMut>(header: &Header, buf: &mut B) {
    let flags_hi = (u8::from(header.qr) << 7)
        | ((header.opcode & 0x0F) << 3)
        | (u8::from(header.aa) << 2)
        | (u8::from(header.tc) << 1)
        | u8::from(header.rd);
    let flags_lo =
        (u8::from(header.ra) << 7) | ((header.z & 0x07) << 4) | (header.rcode & 0x0F);

    buf.put_u16(header.id);
    buf.put_u8(flags_hi);
    buf.put_u8(flags_lo);
    buf.put_u16(header.qdcount);
    buf.put_u16(header.ancount);
    buf.put_u16(header.nscount);
    buf.put_u16(header.arcount);
}

pub fn decode_header(reader: &mut WireReader<'_>) -> Result<Header, WireError> {
    let id = reader.read_u16()?;
    let flags_hi = reader.read_u8()?;
    let flags_lo = reader.read_u8()?;

    Ok(Header {
        id,
        qr: flags_hi & 0x80 != 0,
        opcode: (flags_hi >> 3) & 0x0F,
        aa: flags_hi & 0x04 != 0,
        tc: flags_hi & 0x02 != 0,
        rd: flags_hi & 0x01 != 0,
        ra: flags_lo & 0x80 != 0,
        z: (flags_lo >> 4) & 0x07,
        rcode: flags_lo & 0x0F,
        qdcount: reader.read_u16()?,
        ancount: reader.read_u16()?,
        nscount: reader.read_u16()?,
        arcount: reader.read_u16()?,
    })
}
