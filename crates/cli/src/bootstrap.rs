use meshdns_domain::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub fn load_config(path: Option<&str>) -> anyhow::Result<Config> {
    let config = Config::load(path)?;
    Ok(config)
}

/// RUST_LOG takes precedence over the configured level so a one-off
/// `RUST_LOG=meshdns=trace` run needs no config edit.
pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!(level = %config.logging.level, "Logging initialized");
}
