use super::{decode_name, encode_name, WireError, WireReader};
use bytes::BufMut;
use relay_dns_domain::{RData, RecordClass, RecordType, ResourceRecord};
use std::net::Ipv4Addr;

pub fn encode_record<B: BufMut>(record: &ResourceRecord, buf: &mut B) -> Result<(), WireError> {
    encode_name(&record.name, buf)?;
    buf.put_u16(record.record_type.to_u16());
    buf.put_u16(record.class.to_u16());
    buf.put_u32(record.ttl);

    let mut rdata = Vec::new();
    encode_rdata(&record.rdata, &mut rdata)?;
    let rdlength = u16::try_from(rdata.len()).map_err(|_| WireError::RdataTooLong {
        length: rdata.len(),
    })?;
    buf.put_u16(rdlength);
    buf.put_slice(&rdata);
    Ok(())
}

pub fn encode_rdata<B: BufMut>(rdata: &RData, buf: &mut B) -> Result<(), WireError> {
    match rdata {
        RData::Empty => {}
        RData::A(addr) => buf.put_slice(&addr.octets()),
        RData::Aaaa(octets) => buf.put_slice(octets),
        RData::Name(name) => encode_name(name, buf)?,
        RData::Opaque(bytes) => buf.put_slice(bytes),
    }
    Ok(())
}

pub fn decode_record(reader: &mut WireReader<'_>) -> Result<ResourceRecord, WireError> {
    let name = decode_name(reader)?;
    let record_type = RecordType::from_u16(reader.read_u16()?);
    let class = RecordClass::from_u16(reader.read_u16()?);
    let ttl = reader.read_u32()?;
    let rdlength = usize::from(reader.read_u16()?);
    let rdata = decode_rdata(reader, record_type, rdlength)?;

    Ok(ResourceRecord {
        name,
        record_type,
        class,
        ttl,
        rdata,
    })
}

/// Decodes `rdlength` bytes of rdata for `record_type`.
///
/// A zero length yields [`RData::Empty`] whatever the type. NS and CNAME
/// targets may be compressed but must end exactly at the declared length.
pub fn decode_rdata(
    reader: &mut WireReader<'_>,
    record_type: RecordType,
    rdlength: usize,
) -> Result<RData, WireError> {
    if rdlength == 0 {
        return Ok(RData::Empty);
    }
    if reader.remaining() < rdlength {
        return Err(WireError::UnexpectedEof {
            offset: reader.position() + rdlength,
        });
    }

    match record_type {
        RecordType::A => {
            let bytes = fixed_width(reader, record_type, rdlength, 4)?;
            Ok(RData::A(Ipv4Addr::new(bytes[0], bytes[1], bytes[2], bytes[3])))
        }
        RecordType::AAAA => {
            let bytes = fixed_width(reader, record_type, rdlength, 16)?;
            let mut octets = [0u8; 16];
            octets.copy_from_slice(bytes);
            Ok(RData::Aaaa(octets))
        }
        t if t.is_name_shaped() => {
            let start = reader.position();
            let name = decode_name(reader)?;
            let consumed = reader.position() - start;
            if consumed != rdlength {
                return Err(WireError::RdataLengthMismatch {
                    declared: rdlength,
                    consumed,
                });
            }
            Ok(RData::Name(name))
        }
        _ => Ok(RData::Opaque(reader.read_bytes(rdlength)?.to_vec())),
    }
}

fn fixed_width<'a>(
    reader: &mut WireReader<'a>,
    record_type: RecordType,
    rdlength: usize,
    expected: usize,
) -> Result<&'a [u8], WireError> {
    if rdlength != expected {
        return Err(WireError::BadRdataLength {
            record_type,
            expected,
            actual: rdlength,
        });
    }
    reader.read_bytes(expected)
}
