use super::clock::Clock;
use super::entry::CacheEntry;
use super::error::CacheError;
use super::key::CacheKey;
use super::storage::DnsCache;
use std::collections::{BTreeMap, HashMap};
use std::ffi::OsString;
use std::fs::File;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

impl DnsCache {
    /// Reads the snapshot at `path`. A missing file gives an empty cache;
    /// anything unreadable or unparseable is an error.
    pub fn load_or_empty(
        path: impl Into<PathBuf>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, CacheError> {
        let cache = Self::new(path, clock);

        let raw = match std::fs::read(&cache.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(path = %cache.path.display(), "No cache snapshot found, starting empty");
                return Ok(cache);
            }
            Err(source) => {
                return Err(CacheError::Read {
                    path: cache.path.clone(),
                    source,
                })
            }
        };

        let snapshot: HashMap<String, Vec<CacheEntry>> =
            serde_json::from_slice(&raw).map_err(|source| CacheError::Corrupt {
                path: cache.path.clone(),
                source,
            })?;

        for (raw_key, entries) in snapshot {
            let key = CacheKey::from_canonical(&raw_key).map_err(|source| {
                CacheError::InvalidKey {
                    path: cache.path.clone(),
                    key: raw_key.clone(),
                    source,
                }
            })?;
            cache.entries.entry(key).or_default().extend(entries);
        }

        info!(
            path = %cache.path.display(),
            keys = cache.key_count(),
            entries = cache.entry_count(),
            "Loaded cache snapshot"
        );
        Ok(cache)
    }

    /// Writes the whole store to a sibling temp file, syncs it, then renames
    /// it over the snapshot path. A crash leaves either the old or the new
    /// snapshot in place.
    pub fn save(&self) -> Result<(), CacheError> {
        let snapshot: BTreeMap<String, Vec<CacheEntry>> = self
            .entries
            .iter()
            .map(|slot| (slot.key().canonical(), slot.value().clone()))
            .collect();
        let json = serde_json::to_vec(&snapshot).map_err(CacheError::Serialize)?;

        let tmp_path = temp_path(&self.path);
        write_synced(&tmp_path, &json).map_err(|source| CacheError::Write {
            path: tmp_path.clone(),
            source,
        })?;
        std::fs::rename(&tmp_path, &self.path).map_err(|source| CacheError::Write {
            path: self.path.clone(),
            source,
        })?;
        sync_parent_dir(&self.path);

        debug!(
            path = %self.path.display(),
            keys = snapshot.len(),
            bytes = json.len(),
            "Cache snapshot written"
        );
        Ok(())
    }
}

fn write_synced(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

/// Makes the rename itself durable.
#[cfg(unix)]
fn sync_parent_dir(path: &Path) {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    if let Err(err) = File::open(dir).and_then(|dir| dir.sync_all()) {
        warn!(dir = %dir.display(), error = %err, "Failed to sync cache directory");
    }
}

#[cfg(not(unix))]
fn sync_parent_dir(_path: &Path) {}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("cache"));
    name.push(".tmp");
    path.with_file_name(name)
}
