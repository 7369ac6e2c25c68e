use relay_dns_domain::Config;
use tracing::Level;

pub fn init_logging(config: &Config) {
    let level = config
        .logging
        .level
        .parse::<Level>()
        .unwrap_or(Level::INFO);

    tracing_subscriber::fmt()
        .with_target(true)
        .with_thread_ids(false)
        .with_level(true)
        .with_max_level(level)
        .with_ansi(true)
        .init();

    super::config::log_config(config);
}
