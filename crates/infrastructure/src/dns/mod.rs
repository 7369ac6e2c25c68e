pub mod cache;
pub mod forwarding;
pub mod server;
pub mod transport;
pub mod wire;

pub use cache::{Clock, DnsCache, ManualClock, SystemClock};
pub use forwarding::UdpForwarder;
pub use server::DnsServerHandler;
