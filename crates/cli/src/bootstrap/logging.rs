use pingable_hosts_domain::Config;
use tracing_subscriber::EnvFilter;

/// Diagnostics always go to stderr; stdout carries only result lines.
pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
