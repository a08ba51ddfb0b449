use pingable_hosts_application::ports::StatusReporter;
use pingable_hosts_application::use_cases::HarvestPingableHostsUseCase;
use pingable_hosts_domain::Config;
use pingable_hosts_infrastructure::{IcmpProber, PanOsArpSource};
use std::sync::Arc;

pub struct UseCases {
    pub harvest: HarvestPingableHostsUseCase,
}

impl UseCases {
    pub fn new(config: &Config, reporter: Arc<dyn StatusReporter>) -> anyhow::Result<Self> {
        let arp_source = Arc::new(PanOsArpSource::new(&config.firewall)?);
        let prober = Arc::new(IcmpProber::new());

        Ok(Self {
            harvest: HarvestPingableHostsUseCase::new(arp_source, prober, reporter),
        })
    }
}
