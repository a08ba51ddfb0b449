use async_trait::async_trait;
use pingable_hosts_domain::{DomainError, ProbeResult, ProbeTarget};

#[async_trait]
pub trait ReachabilityProber: Send + Sync {
    /// Sends a single probe. An unanswered probe is `Ok` with
    /// `reachable == false`; `Err(DomainError::ProbeSetup)` means no probe
    /// can succeed and the run must stop.
    async fn probe(&self, target: ProbeTarget) -> Result<ProbeResult, DomainError>;
}
