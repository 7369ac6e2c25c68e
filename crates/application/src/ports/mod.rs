mod dns_cache_port;
mod upstream_resolver;

pub use dns_cache_port::DnsCachePort;
pub use upstream_resolver::UpstreamResolver;
