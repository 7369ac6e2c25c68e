use super::{
    decode_header, decode_question, decode_record, encode_header, encode_question, encode_record,
    WireError, WireReader, HEADER_LEN,
};
use relay_dns_domain::{Packet, ResourceRecord};

/// Serializes a full message.
///
/// The header counts written are the lengths of the sections, not the values
/// stored in `packet.header`.
pub fn encode_packet(packet: &Packet) -> Result<Vec<u8>, WireError> {
    let mut header = packet.header;
    header.qdcount = section_count(packet.questions.len())?;
    header.ancount = section_count(packet.answers.len())?;
    header.nscount = section_count(packet.authority.len())?;
    header.arcount = section_count(packet.additional.len())?;

    let mut buf = Vec::with_capacity(HEADER_LEN + 64 * packet.questions.len().max(1));
    encode_header(&header, &mut buf);
    for question in &packet.questions {
        encode_question(question, &mut buf)?;
    }
    for record in packet.records() {
        encode_record(record, &mut buf)?;
    }
    Ok(buf)
}

/// Parses a full message. Bytes after the last declared record are ignored.
pub fn decode_packet(data: &[u8]) -> Result<Packet, WireError> {
    let mut reader = WireReader::new(data);
    let header = decode_header(&mut reader)?;

    let questions = (0..header.qdcount)
        .map(|_| decode_question(&mut reader))
        .collect::<Result<Vec<_>, _>>()?;
    let answers = decode_section(&mut reader, header.ancount)?;
    let authority = decode_section(&mut reader, header.nscount)?;
    let additional = decode_section(&mut reader, header.arcount)?;

    Ok(Packet {
        header,
        questions,
        answers,
        authority,
        additional,
    })
}

fn decode_section(
    reader: &mut WireReader<'_>,
    count: u16,
) -> Result<Vec<ResourceRecord>, WireError> {
    (0..count).map(|_| decode_record(reader)).collect()
}

fn section_count(len: usize) -> Result<u16, WireError> {
    u16::try_from(len).map_err(|_| WireError::TooManyEntries { count: len })
}
