//! TTL-bounded record cache with a JSON snapshot on disk.

mod clock;
mod compaction;
mod entry;
mod error;
mod key;
mod port;
mod snapshot;
mod storage;

pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use error::CacheError;
pub use key::CacheKey;
pub use storage::DnsCache;
