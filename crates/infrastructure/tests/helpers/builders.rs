#![allow(dead_code)]
use relay_dns_domain::{Header, Packet, Question, RecordClass, RecordType};
use relay_dns_infrastructure::dns::wire::encode_packet;

/// A client request carrying `questions`, with rd set.
pub fn query_packet(id: u16, questions: &[(&str, RecordType)]) -> Packet {
    let questions: Vec<Question> = questions
        .iter()
        .map(|(name, qtype)| Question::new(*name, *qtype, RecordClass::IN))
        .collect();
    Packet {
        header: Header {
            id,
            rd: true,
            qdcount: questions.len() as u16,
            ..Header::default()
        },
        questions,
        ..Packet::default()
    }
}

pub fn client_query(id: u16, name: &str, qtype: RecordType) -> Vec<u8> {
    encode_packet(&query_packet(id, &[(name, qtype)])).unwrap()
}
