use super::{decode_name, encode_name, WireError, WireReader};
use bytes::BufMut;
use relay_dns_domain::{Question, RecordClass, RecordType};

pub fn encode_question<B: BufMut>(question: &Question, buf: &mut B) -> Result<(), WireError> {
    encode_name(&question.qname, buf)?;
    buf.put_u16(question.qtype.to_u16());
    buf.put_u16(question.qclass.to_u16());
    Ok(())
}

pub fn decode_question(reader: &mut WireReader<'_>) -> Result<Question, WireError> {
    let qname = decode_name(reader)?;
    let qtype = RecordType::from_u16(reader.read_u16()?);
    let qclass = RecordClass::from_u16(reader.read_u16()?);
    Ok(Question {
        qname,
        qtype,
        qclass,
    })
}
