use super::{RData, RecordClass, RecordType};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRecord {
    pub name: String,
    pub record_type: RecordType,
    pub class: RecordClass,
    /// Seconds, relative to when the record was obtained.
    pub ttl: u32,
    pub rdata: RData,
}

impl ResourceRecord {
    pub fn new(
        name: impl Into<String>,
        record_type: RecordType,
        class: RecordClass,
        ttl: u32,
        rdata: RData,
    ) -> Self {
        Self {
            name: name.into(),
            record_type,
            class,
            ttl,
            rdata,
        }
    }

    pub fn has_rdata(&self) -> bool {
        !self.rdata.is_empty()
    }
}

impl fmt::Display for ResourceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}|{}|{}|{}|{}",
            self.name, self.record_type, self.class, self.ttl, self.rdata
        )
    }
}
