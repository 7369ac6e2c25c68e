use relay_dns_domain::{RData, RecordClass, RecordType, ResourceRecord};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry {
    /// Absolute expiry, Unix seconds.
    pub deadline: u64,
    #[serde(rename = "type")]
    pub record_type: RecordType,
    pub class: RecordClass,
    pub rdata: RData,
}

impl CacheEntry {
    /// Deadline is the whole second `now + ttl`, with the fraction of the
    /// current second dropped.
    pub fn from_record(record: &ResourceRecord, now_ms: u64) -> Self {
        Self {
            deadline: (now_ms / 1_000).saturating_add(u64::from(record.ttl)),
            record_type: record.record_type,
            class: record.class,
            rdata: record.rdata.clone(),
        }
    }

    #[inline]
    fn deadline_ms(&self) -> u64 {
        self.deadline.saturating_mul(1_000)
    }

    #[inline]
    pub fn is_live(&self, now_ms: u64) -> bool {
        self.deadline_ms() > now_ms
    }

    /// Whole seconds left before expiry, rounded down and exclusive of the
    /// deadline itself. `None` once expired.
    #[inline]
    pub fn remaining_ttl(&self, now_ms: u64) -> Option<u32> {
        if !self.is_live(now_ms) {
            return None;
        }
        let left = (self.deadline_ms() - now_ms - 1) / 1_000;
        Some(u32::try_from(left).unwrap_or(u32::MAX))
    }

    pub fn to_record(&self, name: &str, now_ms: u64) -> Option<ResourceRecord> {
        let ttl = self.remaining_ttl(now_ms)?;
        Some(ResourceRecord::new(
            name,
            self.record_type,
            self.class,
            ttl,
            self.rdata.clone(),
        ))
    }
}
