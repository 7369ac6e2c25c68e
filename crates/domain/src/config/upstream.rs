use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    /// `host:port` or `ip:port` of the resolver cache misses are forwarded to.
    #[serde(default = "default_server")]
    pub server: String,

    /// Upper bound on each upstream exchange, in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl UpstreamConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

fn default_server() -> String {
    "ns1.e1.ru:53".to_string()
}

fn default_timeout_ms() -> u64 {
    2000
}
