use relay_dns_domain::{DomainError, RecordClass, RecordType, ResourceRecord};

/// TTL-bounded record store consulted before going upstream.
pub trait DnsCachePort: Send + Sync {
    /// Appends an entry expiring `record.ttl` seconds from now.
    fn add(&self, record: &ResourceRecord);

    /// `None` when nothing was ever cached under the key. Otherwise the live
    /// entries, each with its TTL recomputed as the time left until expiry.
    fn find(
        &self,
        name: &str,
        record_type: RecordType,
        class: RecordClass,
    ) -> Option<Vec<ResourceRecord>>;

    /// Drops expired entries and keys left empty. Returns entries removed.
    fn sweep(&self) -> usize;

    /// Writes the whole store as one snapshot.
    fn persist(&self) -> Result<(), DomainError>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
