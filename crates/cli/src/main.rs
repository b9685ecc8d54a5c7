use clap::Parser;
use meshdns_application::ports::{DirectoryCachePort, ServiceDirectory};
use meshdns_application::use_cases::ResolveServiceUseCase;
use meshdns_infrastructure::directory::DirectoryCache;
use meshdns_infrastructure::dns::{ChainEnd, MeshServiceHandler};
use meshdns_infrastructure::store::EtcdSpecSource;
use meshdns_jobs::{DirectorySyncJob, StoreConnectJob};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

mod bootstrap;
mod server;

#[derive(Parser)]
#[command(name = "meshdns")]
#[command(version = "0.2.0")]
#[command(about = "MeshDNS - authoritative DNS resolver for mesh service directories")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = bootstrap::load_config(cli.config.as_deref())?;
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(bind) = cli.bind {
        config.server.bind_address = bind;
    }
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }

    bootstrap::init_logging(&config);

    info!("Starting MeshDNS v{}", env!("CARGO_PKG_VERSION"));
    info!(zones = ?config.zones, ttl = config.ttl, "Serving mesh zones");

    // Dependency injection: store -> cache -> resolver -> handler
    let spec_source = Arc::new(EtcdSpecSource::new(config.store.clone()));
    let cache = Arc::new(DirectoryCache::new(spec_source));
    let resolver = Arc::new(ResolveServiceUseCase::new(
        cache.clone() as Arc<dyn ServiceDirectory>,
        config.ttl,
    ));

    let shutdown = CancellationToken::new();

    let connect_job = Arc::new(StoreConnectJob::new(
        cache.clone() as Arc<dyn DirectoryCachePort>
    ));
    connect_job.start().await;

    let sync_job = Arc::new(
        DirectorySyncJob::new(cache.clone() as Arc<dyn DirectoryCachePort>)
            .with_interval(config.store.refresh_interval_secs)
            .with_cancellation(shutdown.clone()),
    );
    sync_job.start().await;

    let handler = MeshServiceHandler::new(resolver, config.zones.clone(), ChainEnd);
    let dns_addr = format!("{}:{}", config.server.bind_address, config.server.port);

    tokio::select! {
        result = server::start_dns_server(dns_addr, handler) => {
            if let Err(e) = result {
                error!(error = %e, "DNS server error");
                shutdown.cancel();
                return Err(e);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
            shutdown.cancel();
        }
    }

    info!("MeshDNS stopped");
    Ok(())
}
