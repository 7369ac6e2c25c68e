use relay_dns_application::use_cases::ResolveQueryUseCase;
use relay_dns_domain::Config;
use relay_dns_infrastructure::dns::{DnsCache, DnsServerHandler, SystemClock, UdpForwarder};
use std::sync::Arc;
use tracing::info;

pub struct DnsServices {
    pub handler: DnsServerHandler,
}

impl DnsServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        info!("Initializing DNS services");

        let cache = Arc::new(Self::build_cache(config)?);
        let forwarder = Arc::new(Self::build_forwarder(config)?);

        let use_case = Arc::new(ResolveQueryUseCase::new(cache, forwarder));

        Ok(Self {
            handler: DnsServerHandler::new(use_case),
        })
    }

    fn build_cache(config: &Config) -> anyhow::Result<DnsCache> {
        let cache = DnsCache::load_or_empty(&config.cache.path, Arc::new(SystemClock))?;
        info!(
            path = %config.cache.path,
            entries = cache.entry_count(),
            "Cache ready"
        );
        Ok(cache)
    }

    fn build_forwarder(config: &Config) -> anyhow::Result<UdpForwarder> {
        let upstream = config.upstream_addr()?;
        info!(
            upstream = %upstream,
            timeout_ms = config.upstream.timeout_ms,
            resolve_per_query = upstream.is_unresolved(),
            "Upstream configured"
        );
        Ok(UdpForwarder::new(upstream, config.upstream.timeout()))
    }
}
