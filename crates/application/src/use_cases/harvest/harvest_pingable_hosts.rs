use super::HarvestInterfaceUseCase;
use crate::ports::{ArpRecordSource, ReachabilityProber, StatusReporter};
use crate::services::{aggregate, group_by_interface};
use futures::{stream, StreamExt, TryStreamExt};
use pingable_hosts_domain::{DomainError, HarvestOptions, HarvestReport};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Use case: download the ARP cache, harvest every interface and return the
/// sorted reachable addresses.
///
/// Interfaces are harvested up to `max_concurrent_interfaces` at a time.
/// Probing inside an interface is always sequential, so which candidates
/// count toward the quota only depends on ARP order. The first fatal error
/// drops every harvest still in flight.
pub struct HarvestPingableHostsUseCase {
    source: Arc<dyn ArpRecordSource>,
    harvest_interface: HarvestInterfaceUseCase,
    reporter: Arc<dyn StatusReporter>,
}

impl HarvestPingableHostsUseCase {
    pub fn new(
        source: Arc<dyn ArpRecordSource>,
        prober: Arc<dyn ReachabilityProber>,
        reporter: Arc<dyn StatusReporter>,
    ) -> Self {
        Self {
            source,
            harvest_interface: HarvestInterfaceUseCase::new(prober),
            reporter,
        }
    }

    pub async fn execute(&self, options: &HarvestOptions) -> Result<HarvestReport, DomainError> {
        let started = Instant::now();
        let probes_before = self.harvest_interface.probes_sent();

        self.reporter.step_started(&format!(
            "Downloading ARP cache from {}",
            self.source.describe()
        ));
        let records = self.reported(self.source.fetch_arp_records().await)?;

        self.reporter.step_started("Parsing ARP cache");
        let groups = group_by_interface(&records);
        self.reporter.step_succeeded();
        info!(
            records = records.len(),
            interfaces = groups.len(),
            "ARP cache grouped by interface"
        );

        self.reporter.step_started("Pinging IP addresses");
        let quota = options.quota;
        let timeout = options.probe_timeout;
        let harvested = stream::iter(groups.iter())
            .map(|(interface, candidates)| async move {
                let found = self
                    .harvest_interface
                    .execute(candidates, quota, timeout)
                    .await?;
                debug!(
                    interface = %interface,
                    candidates = candidates.len(),
                    found = found.len(),
                    "Interface harvested"
                );
                Ok::<_, DomainError>(found)
            })
            .buffer_unordered(options.max_concurrent_interfaces.max(1))
            .try_collect::<Vec<_>>()
            .await;
        let harvested = self.reported(harvested)?;

        let addresses = aggregate(harvested)?;
        let report = HarvestReport {
            addresses,
            interfaces: groups.len(),
            probes_sent: self.harvest_interface.probes_sent() - probes_before,
            elapsed: started.elapsed(),
        };

        info!(
            pingable = report.addresses.len(),
            probes = report.probes_sent,
            "Harvest complete"
        );
        Ok(report)
    }

    fn reported<T>(&self, result: Result<T, DomainError>) -> Result<T, DomainError> {
        match &result {
            Ok(_) => self.reporter.step_succeeded(),
            Err(_) => self.reporter.step_failed(),
        }
        result
    }
}
