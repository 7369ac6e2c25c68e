use super::storage::DnsCache;
use relay_dns_application::ports::DnsCachePort;
use relay_dns_domain::{DomainError, RecordClass, RecordType, ResourceRecord};

impl DnsCachePort for DnsCache {
    fn add(&self, record: &ResourceRecord) {
        self.insert(record);
    }

    fn find(
        &self,
        name: &str,
        record_type: RecordType,
        class: RecordClass,
    ) -> Option<Vec<ResourceRecord>> {
        self.lookup(name, record_type, class)
    }

    fn sweep(&self) -> usize {
        self.sweep_expired()
    }

    fn persist(&self) -> Result<(), DomainError> {
        self.save().map_err(DomainError::from)
    }

    fn len(&self) -> usize {
        self.entry_count()
    }
}
