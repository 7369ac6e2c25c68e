use super::storage::DnsCache;
use tracing::debug;

impl DnsCache {
    /// Drops expired entries, then keys with nothing left.
    /// Returns the number of entries removed.
    pub fn sweep_expired(&self) -> usize {
        let now = self.now_millis();
        let mut removed = 0;

        self.entries.retain(|_, entries| {
            let before = entries.len();
            entries.retain(|entry| entry.is_live(now));
            removed += before - entries.len();
            !entries.is_empty()
        });

        if removed > 0 {
            debug!(removed, keys = self.entries.len(), "Cache sweep completed");
        }

        removed
    }
}
