#![allow(dead_code)]

use async_trait::async_trait;
use relay_dns_application::ports::{DnsCachePort, UpstreamResolver};
use relay_dns_domain::{
    DomainError, Packet, Question, RecordClass, RecordType, ResourceRecord, UpstreamError,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

type Key = (String, RecordType, RecordClass);

/// In-memory cache without clock: entries stay until `expire_all`.
#[derive(Clone, Default)]
pub struct MockDnsCache {
    entries: Arc<RwLock<HashMap<Key, Vec<ResourceRecord>>>>,
    sweeps: Arc<AtomicUsize>,
    persists: Arc<AtomicUsize>,
    fail_persist: Arc<RwLock<bool>>,
}

impl MockDnsCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_empty_key(&self, name: &str, record_type: RecordType) {
        self.entries
            .write()
            .unwrap()
            .insert((name.to_string(), record_type, RecordClass::IN), Vec::new());
    }

    pub fn sweep_count(&self) -> usize {
        self.sweeps.load(Ordering::SeqCst)
    }

    pub fn persist_count(&self) -> usize {
        self.persists.load(Ordering::SeqCst)
    }

    pub fn set_fail_persist(&self, fail: bool) {
        *self.fail_persist.write().unwrap() = fail;
    }

    pub fn records_for(&self, name: &str, record_type: RecordType) -> Vec<ResourceRecord> {
        self.entries
            .read()
            .unwrap()
            .get(&(name.to_string(), record_type, RecordClass::IN))
            .cloned()
            .unwrap_or_default()
    }
}

impl DnsCachePort for MockDnsCache {
    fn add(&self, record: &ResourceRecord) {
        self.entries
            .write()
            .unwrap()
            .entry((record.name.clone(), record.record_type, record.class))
            .or_default()
            .push(record.clone());
    }

    fn find(
        &self,
        name: &str,
        record_type: RecordType,
        class: RecordClass,
    ) -> Option<Vec<ResourceRecord>> {
        self.entries
            .read()
            .unwrap()
            .get(&(name.to_string(), record_type, class))
            .cloned()
    }

    fn sweep(&self) -> usize {
        self.sweeps.fetch_add(1, Ordering::SeqCst);
        0
    }

    fn persist(&self) -> Result<(), DomainError> {
        self.persists.fetch_add(1, Ordering::SeqCst);
        if *self.fail_persist.read().unwrap() {
            return Err(DomainError::CacheStore("disk full".to_string()));
        }
        Ok(())
    }

    fn len(&self) -> usize {
        self.entries.read().unwrap().values().map(Vec::len).sum()
    }
}

#[derive(Clone, Default)]
pub struct MockUpstreamResolver {
    responses: Arc<RwLock<HashMap<String, Result<Packet, UpstreamError>>>>,
    calls: Arc<RwLock<Vec<Question>>>,
}

impl MockUpstreamResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_reply(&self, qname: &str, reply: Packet) {
        self.responses
            .write()
            .unwrap()
            .insert(qname.to_string(), Ok(reply));
    }

    pub fn set_error(&self, qname: &str, error: UpstreamError) {
        self.responses
            .write()
            .unwrap()
            .insert(qname.to_string(), Err(error));
    }

    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }

    pub fn calls(&self) -> Vec<Question> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl UpstreamResolver for MockUpstreamResolver {
    async fn forward(&self, question: &Question) -> Result<Packet, UpstreamError> {
        self.calls.write().unwrap().push(question.clone());
        self.responses
            .read()
            .unwrap()
            .get(&question.qname)
            .cloned()
            .unwrap_or_else(|| {
                Err(UpstreamError::Timeout {
                    server: self.server(),
                })
            })
    }

    fn server(&self) -> String {
        "mock-upstream:53".to_string()
    }
}
