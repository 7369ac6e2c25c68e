use relay_dns_application::ports::DnsCachePort;
use relay_dns_domain::{RData, RecordClass, RecordType, ResourceRecord};
use relay_dns_infrastructure::dns::cache::{
    CacheEntry, CacheError, CacheKey, DnsCache, ManualClock, SystemClock,
};
use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::sync::Arc;
use tempfile::TempDir;

const START: u64 = 1_700_000_000;

fn create_cache(dir: &TempDir) -> (DnsCache, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(START));
    let cache = DnsCache::new(dir.path().join("cache.json"), clock.clone());
    (cache, clock)
}

fn a_record(name: &str, ttl: u32, last_octet: u8) -> ResourceRecord {
    ResourceRecord::new(
        name,
        RecordType::A,
        RecordClass::IN,
        ttl,
        RData::A(Ipv4Addr::new(192, 0, 2, last_octet)),
    )
}

// ── add / find / sweep ───────────────────────────────────────────────────────

#[test]
fn test_find_returns_remaining_ttl() {
    let dir = TempDir::new().unwrap();
    let (cache, clock) = create_cache(&dir);

    cache.add(&a_record("example.com", 60, 1));
    clock.advance(3);

    let found = cache
        .find("example.com", RecordType::A, RecordClass::IN)
        .unwrap();
    assert_eq!(found.len(), 1);
    assert!(found[0].ttl > 55 && found[0].ttl <= 60, "ttl {}", found[0].ttl);
    assert_eq!(found[0].ttl, 56);
    assert_eq!(found[0].rdata, RData::A(Ipv4Addr::new(192, 0, 2, 1)));
}

#[test]
fn test_immediate_find_reports_less_than_original_ttl() {
    let dir = TempDir::new().unwrap();
    let cache = DnsCache::new(dir.path().join("cache.json"), Arc::new(SystemClock));

    cache.add(&a_record("example.com", 300, 1));
    let found = cache
        .find("example.com", RecordType::A, RecordClass::IN)
        .unwrap();
    assert_eq!(found.len(), 1);
    assert!(found[0].ttl < 300, "ttl {}", found[0].ttl);
    assert!(found[0].ttl >= 298, "ttl {}", found[0].ttl);
}

#[test]
fn test_ttl_drops_within_the_first_second() {
    let dir = TempDir::new().unwrap();
    let (cache, clock) = create_cache(&dir);
    cache.add(&a_record("example.com", 300, 1));

    let ttl_at = |cache: &DnsCache| {
        cache
            .find("example.com", RecordType::A, RecordClass::IN)
            .unwrap()[0]
            .ttl
    };
    assert_eq!(ttl_at(&cache), 299);
    clock.advance_millis(1);
    assert_eq!(ttl_at(&cache), 299);
    clock.advance_millis(999);
    assert_eq!(ttl_at(&cache), 298);
}

#[test]
fn test_find_never_inserted_is_none() {
    let dir = TempDir::new().unwrap();
    let (cache, _) = create_cache(&dir);
    cache.add(&a_record("example.com", 60, 1));

    assert!(cache.find("example.org", RecordType::A, RecordClass::IN).is_none());
    assert!(cache
        .find("example.com", RecordType::AAAA, RecordClass::IN)
        .is_none());
}

#[test]
fn test_lookup_is_case_insensitive() {
    let dir = TempDir::new().unwrap();
    let (cache, _) = create_cache(&dir);
    cache.add(&a_record("Example.COM", 60, 1));

    let found = cache
        .find("example.com", RecordType::A, RecordClass::IN)
        .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "example.com");
}

#[test]
fn test_expired_key_reads_empty_until_swept() {
    let dir = TempDir::new().unwrap();
    let (cache, clock) = create_cache(&dir);
    cache.add(&a_record("example.com", 60, 1));

    clock.advance(60);
    assert_eq!(
        cache.find("example.com", RecordType::A, RecordClass::IN),
        Some(Vec::new())
    );

    assert_eq!(cache.sweep(), 1);
    assert!(cache.find("example.com", RecordType::A, RecordClass::IN).is_none());
    assert!(cache.is_empty());
}

#[test]
fn test_sweep_keeps_live_entries_under_same_key() {
    let dir = TempDir::new().unwrap();
    let (cache, clock) = create_cache(&dir);
    cache.add(&a_record("example.com", 10, 1));
    cache.add(&a_record("example.com", 100, 2));

    clock.advance(50);
    assert_eq!(cache.sweep(), 1);

    let found = cache
        .find("example.com", RecordType::A, RecordClass::IN)
        .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].ttl, 49);
    assert_eq!(found[0].rdata, RData::A(Ipv4Addr::new(192, 0, 2, 2)));
}

#[test]
fn test_duplicates_accumulate() {
    let dir = TempDir::new().unwrap();
    let (cache, _) = create_cache(&dir);
    cache.add(&a_record("example.com", 60, 1));
    cache.add(&a_record("example.com", 60, 1));

    assert_eq!(cache.len(), 2);
    assert_eq!(cache.key_count(), 1);
    assert_eq!(
        cache
            .find("example.com", RecordType::A, RecordClass::IN)
            .unwrap()
            .len(),
        2
    );
}

#[test]
fn test_zero_ttl_record_is_never_served() {
    let dir = TempDir::new().unwrap();
    let (cache, _) = create_cache(&dir);
    cache.add(&a_record("example.com", 0, 1));

    assert_eq!(
        cache.find("example.com", RecordType::A, RecordClass::IN),
        Some(Vec::new())
    );
}

// ── Snapshot ─────────────────────────────────────────────────────────────────

#[test]
fn test_persist_then_load_restores_entries() {
    let dir = TempDir::new().unwrap();
    let (cache, clock) = create_cache(&dir);
    cache.add(&a_record("example.com", 300, 1));
    cache.add(&ResourceRecord::new(
        "example.com",
        RecordType::AAAA,
        RecordClass::IN,
        300,
        RData::Aaaa([0x20, 0x01, 0x0d, 0xb8, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1]),
    ));
    cache.add(&ResourceRecord::new(
        "example.com",
        RecordType::NS,
        RecordClass::IN,
        3600,
        RData::Name("ns1.example.com".into()),
    ));
    cache.persist().unwrap();

    let loaded = DnsCache::load_or_empty(cache.path(), clock.clone()).unwrap();
    assert_eq!(loaded.len(), 3);
    assert_eq!(loaded.key_count(), 3);

    clock.advance(100);
    let aaaa = loaded
        .find("example.com", RecordType::AAAA, RecordClass::IN)
        .unwrap();
    assert_eq!(aaaa[0].ttl, 199);
    assert_eq!(
        aaaa[0].rdata,
        RData::Aaaa([0x20, 0x01, 0x0d, 0xb8, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1])
    );
    let ns = loaded
        .find("example.com", RecordType::NS, RecordClass::IN)
        .unwrap();
    assert_eq!(ns[0].rdata.as_name(), Some("ns1.example.com"));
}

#[test]
fn test_snapshot_layout() {
    let dir = TempDir::new().unwrap();
    let (cache, _) = create_cache(&dir);
    cache.add(&a_record("example.com", 300, 7));
    cache.persist().unwrap();

    let raw = std::fs::read_to_string(cache.path()).unwrap();
    let snapshot: HashMap<String, Vec<CacheEntry>> = serde_json::from_str(&raw).unwrap();
    let key = CacheKey::new("example.com", RecordType::A, RecordClass::IN).canonical();
    assert_eq!(key, r#"["example.com",1,1]"#);
    assert_eq!(
        snapshot[&key],
        vec![CacheEntry {
            deadline: START + 300,
            record_type: RecordType::A,
            class: RecordClass::IN,
            rdata: RData::A(Ipv4Addr::new(192, 0, 2, 7)),
        }]
    );
}

#[test]
fn test_persist_leaves_no_temp_file() {
    let dir = TempDir::new().unwrap();
    let (cache, _) = create_cache(&dir);
    cache.add(&a_record("example.com", 300, 1));
    cache.persist().unwrap();
    cache.persist().unwrap();

    let names: Vec<String> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["cache.json".to_string()]);
}

#[test]
fn test_persist_overwrites_stale_temp_file() {
    let dir = TempDir::new().unwrap();
    let (cache, clock) = create_cache(&dir);
    std::fs::write(dir.path().join("cache.json.tmp"), vec![b'{'; 8192]).unwrap();
    cache.add(&a_record("example.com", 300, 1));

    cache.persist().unwrap();

    assert!(!dir.path().join("cache.json.tmp").exists());
    let loaded = DnsCache::load_or_empty(cache.path(), clock).unwrap();
    assert_eq!(loaded.len(), 1);
}

#[test]
fn test_missing_file_gives_empty_cache() {
    let dir = TempDir::new().unwrap();
    let clock = Arc::new(ManualClock::new(START));
    let cache = DnsCache::load_or_empty(dir.path().join("absent.json"), clock).unwrap();
    assert!(cache.is_empty());
}

#[test]
fn test_corrupt_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cache.json");
    std::fs::write(&path, b"{ not json").unwrap();

    let clock = Arc::new(ManualClock::new(START));
    let result = DnsCache::load_or_empty(&path, clock);
    assert!(matches!(result, Err(CacheError::Corrupt { .. })));
}

#[test]
fn test_bad_key_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cache.json");
    std::fs::write(&path, br#"{"example.com|A|IN": []}"#).unwrap();

    let clock = Arc::new(ManualClock::new(START));
    let result = DnsCache::load_or_empty(&path, clock);
    assert!(matches!(result, Err(CacheError::InvalidKey { .. })));
}

#[test]
fn test_persist_into_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let clock = Arc::new(ManualClock::new(START));
    let cache = DnsCache::new(dir.path().join("nope").join("cache.json"), clock);
    cache.add(&a_record("example.com", 300, 1));

    let err = cache.persist().unwrap_err();
    assert!(err.to_string().contains("cache snapshot"), "{}", err);
}
