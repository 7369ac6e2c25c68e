use relay_dns_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides)?;
    config.validate()?;
    Ok(config)
}

/// Logs the effective configuration. Called once logging is up.
pub fn log_config(config: &Config) {
    info!(
        bind = %config.server.bind_address,
        port = config.server.dns_port,
        upstream = %config.upstream.server,
        timeout_ms = config.upstream.timeout_ms,
        cache_file = %config.cache.path,
        log_level = %config.logging.level,
        "Configuration loaded"
    );
}
