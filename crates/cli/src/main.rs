use clap::Parser;
use pingable_hosts_application::ports::StatusReporter;
use pingable_hosts_domain::{CliOverrides, HarvestOptions};
use std::sync::Arc;
use tracing::info;

mod bootstrap;
mod di;
mod output;

#[derive(Parser)]
#[command(name = "pan-pingable-hosts")]
#[command(version)]
#[command(about = "Harvests pingable IP addresses from a Palo Alto Networks firewall ARP cache")]
#[command(after_help = "EXAMPLES:
  pan-pingable-hosts fw01.domain.com
  PAN_PASSWORD=... pan-pingable-hosts -u user panwfw01.corp.com
  pan-pingable-hosts -u user -n 4 panwfw01.corp.com")]
struct Cli {
    /// Firewall hostname or address
    firewall: Option<String>,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// PAN user
    #[arg(short = 'u', long)]
    user: Option<String>,

    /// Number of addresses per interface
    #[arg(short = 'n', long = "addresses", value_name = "COUNT")]
    addresses: Option<usize>,

    /// ICMP timeout in milliseconds
    #[arg(short = 't', long = "timeout", value_name = "MS")]
    timeout: Option<u64>,

    /// Interfaces harvested concurrently
    #[arg(long, value_name = "N")]
    concurrency: Option<usize>,

    /// Verify the firewall's TLS certificate
    #[arg(long)]
    verify_tls: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        firewall: cli.firewall,
        user: cli.user,
        password: bootstrap::password_from_env(),
        verify_tls: cli.verify_tls,
        addresses_per_interface: cli.addresses,
        probe_timeout_ms: cli.timeout,
        max_concurrent_interfaces: cli.concurrency,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting pan-pingable-hosts v{}", env!("CARGO_PKG_VERSION"));

    let reporter: Arc<dyn StatusReporter> = Arc::new(output::TerminalReporter);
    let use_cases = di::UseCases::new(&config, reporter.clone())?;

    let options = HarvestOptions::from(&config.harvest);
    let report = use_cases.harvest.execute(&options).await?;

    output::write_addresses(&mut std::io::stdout().lock(), &report.addresses)?;
    reporter.finished(&report);

    Ok(())
}
