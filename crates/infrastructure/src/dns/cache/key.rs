use compact_str::CompactString;
use relay_dns_domain::{RecordClass, RecordType};

/// Cache lookup key. Names are compared case-insensitively.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub name: CompactString,
    pub record_type: RecordType,
    pub class: RecordClass,
}

impl CacheKey {
    #[inline]
    pub fn new(name: &str, record_type: RecordType, class: RecordClass) -> Self {
        let name: CompactString = name
            .strip_suffix('.')
            .unwrap_or(name)
            .chars()
            .map(|c| c.to_ascii_lowercase())
            .collect();
        Self {
            name,
            record_type,
            class,
        }
    }

    /// Snapshot form: the JSON text of `[name, type, class]`.
    pub fn canonical(&self) -> String {
        serde_json::json!([
            self.name.as_str(),
            self.record_type.to_u16(),
            self.class.to_u16()
        ])
        .to_string()
    }

    pub fn from_canonical(raw: &str) -> Result<Self, serde_json::Error> {
        let (name, record_type, class): (CompactString, RecordType, RecordClass) =
            serde_json::from_str(raw)?;
        Ok(Self::new(&name, record_type, class))
    }
}
