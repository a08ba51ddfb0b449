use crate::ports::ReachabilityProber;
use pingable_hosts_domain::{is_placeholder_address, DomainError, ProbeTarget};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Use case: collect up to `quota` reachable addresses from one interface's
/// candidate list, probing candidates strictly in list order.
pub struct HarvestInterfaceUseCase {
    prober: Arc<dyn ReachabilityProber>,
    probes_sent: AtomicU64,
}

impl HarvestInterfaceUseCase {
    pub fn new(prober: Arc<dyn ReachabilityProber>) -> Self {
        Self {
            prober,
            probes_sent: AtomicU64::new(0),
        }
    }

    /// Returns the reachable candidates in the order they appear in
    /// `candidates`. Probing stops as soon as `quota` of them are found, so
    /// later candidates are never contacted.
    pub async fn execute(
        &self,
        candidates: &[String],
        quota: usize,
        timeout: Duration,
    ) -> Result<Vec<String>, DomainError> {
        let mut reachable = Vec::with_capacity(quota.min(candidates.len()));
        if quota == 0 {
            return Ok(reachable);
        }

        for address in candidates {
            if is_placeholder_address(address) {
                debug!(address = %address, "Skipping placeholder address");
                continue;
            }

            self.probes_sent.fetch_add(1, Ordering::Relaxed);
            let result = match self
                .prober
                .probe(ProbeTarget::new(address.as_str(), timeout))
                .await
            {
                Ok(result) => result,
                Err(DomainError::InvalidAddress(addr)) => {
                    warn!(address = %addr, "Skipping malformed ARP address");
                    continue;
                }
                Err(e) => return Err(e),
            };

            if !result.reachable {
                debug!(address = %address, "No echo reply");
                continue;
            }

            debug!(address = %address, "Echo reply received");
            reachable.push(address.clone());
            if reachable.len() == quota {
                break;
            }
        }

        Ok(reachable)
    }

    /// Probes sent by this use case since it was created.
    pub fn probes_sent(&self) -> u64 {
        self.probes_sent.load(Ordering::Relaxed)
    }
}
