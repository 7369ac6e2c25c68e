use crate::dns_record::{RecordClass, RecordType};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Question {
    /// Dot-joined labels, no trailing dot.
    pub qname: String,
    pub qtype: RecordType,
    pub qclass: RecordClass,
}

impl Question {
    pub fn new(qname: impl Into<String>, qtype: RecordType, qclass: RecordClass) -> Self {
        Self {
            qname: qname.into(),
            qtype,
            qclass,
        }
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.qname, self.qtype, self.qclass)
    }
}
