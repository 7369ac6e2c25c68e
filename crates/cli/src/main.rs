use clap::Parser;
use relay_dns_domain::CliOverrides;
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "relay-dns")]
#[command(version = "0.1.0")]
#[command(about = "relay-dns - caching DNS forwarder")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Upstream server (host:port)
    #[arg(short = 'u', long)]
    upstream: Option<String>,

    /// Cache snapshot path
    #[arg(long, value_name = "FILE")]
    cache_file: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        bind_address: cli.bind.clone(),
        upstream: cli.upstream.clone(),
        cache_path: cli.cache_file.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting relay-dns v{}", env!("CARGO_PKG_VERSION"));

    let dns_services = di::DnsServices::new(&config)?;
    let bind_addr = config.server.socket_addr()?;

    server::run_dns_server(bind_addr, dns_services.handler).await?;

    info!("Server shutdown complete");
    Ok(())
}
