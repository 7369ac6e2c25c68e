use super::{Header, Question};
use crate::dns_record::ResourceRecord;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Packet {
    pub header: Header,
    pub questions: Vec<Question>,
    pub answers: Vec<ResourceRecord>,
    pub authority: Vec<ResourceRecord>,
    pub additional: Vec<ResourceRecord>,
}

impl Packet {
    /// Single-question recursive query, as sent to the upstream.
    pub fn query(id: u16, question: Question) -> Self {
        Self {
            header: Header::query(id),
            questions: vec![question],
            ..Self::default()
        }
    }

    /// Builds the reply to `request`.
    ///
    /// Answers with empty rdata are dropped so that `ancount` always equals
    /// the number of records actually carried in the answer section.
    pub fn response(
        request: &Header,
        questions: Vec<Question>,
        answers: Vec<ResourceRecord>,
    ) -> Self {
        let answers: Vec<ResourceRecord> =
            answers.into_iter().filter(ResourceRecord::has_rdata).collect();

        let mut header = Header::response_to(request);
        header.qdcount = section_count(questions.len());
        header.ancount = section_count(answers.len());

        Self {
            header,
            questions,
            answers,
            authority: Vec::new(),
            additional: Vec::new(),
        }
    }

    /// Sets the header counts from the section lengths.
    pub fn sync_counts(&mut self) {
        self.header.qdcount = section_count(self.questions.len());
        self.header.ancount = section_count(self.answers.len());
        self.header.nscount = section_count(self.authority.len());
        self.header.arcount = section_count(self.additional.len());
    }

    /// Iterates every record of the answer, authority and additional sections.
    pub fn records(&self) -> impl Iterator<Item = &ResourceRecord> {
        self.answers
            .iter()
            .chain(self.authority.iter())
            .chain(self.additional.iter())
    }
}

/// Header counts saturate; the wire encoder rejects oversized sections.
fn section_count(len: usize) -> u16 {
    u16::try_from(len).unwrap_or(u16::MAX)
}
