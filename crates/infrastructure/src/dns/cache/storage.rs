use super::clock::Clock;
use super::entry::CacheEntry;
use super::key::CacheKey;
use dashmap::DashMap;
use relay_dns_domain::{RecordClass, RecordType, ResourceRecord};
use rustc_hash::FxBuildHasher;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// Record cache keyed by (lowercased name, type, class).
///
/// Each key holds every entry ever added for it until a sweep drops the
/// expired ones. Identical records are not merged.
pub struct DnsCache {
    pub(super) entries: DashMap<CacheKey, Vec<CacheEntry>, FxBuildHasher>,
    pub(super) path: PathBuf,
    pub(super) clock: Arc<dyn Clock>,
}

impl DnsCache {
    /// Empty cache that will persist to `path`.
    pub fn new(path: impl Into<PathBuf>, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: DashMap::with_hasher(FxBuildHasher),
            path: path.into(),
            clock,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    #[inline]
    pub fn now_millis(&self) -> u64 {
        self.clock.now_millis()
    }

    pub fn insert(&self, record: &ResourceRecord) {
        let key = CacheKey::new(&record.name, record.record_type, record.class);
        let entry = CacheEntry::from_record(record, self.now_millis());

        debug!(
            name = %key.name,
            record_type = %key.record_type,
            ttl = record.ttl,
            "Caching record"
        );
        self.entries.entry(key).or_default().push(entry);
    }

    /// Live entries for the key, rebuilt as records named `name`.
    pub fn lookup(
        &self,
        name: &str,
        record_type: RecordType,
        class: RecordClass,
    ) -> Option<Vec<ResourceRecord>> {
        let key = CacheKey::new(name, record_type, class);
        let entries = self.entries.get(&key)?;
        let now = self.now_millis();

        Some(
            entries
                .value()
                .iter()
                .filter_map(|entry| entry.to_record(name, now))
                .collect(),
        )
    }

    pub fn entry_count(&self) -> usize {
        self.entries.iter().map(|slot| slot.value().len()).sum()
    }

    pub fn key_count(&self) -> usize {
        self.entries.len()
    }
}
