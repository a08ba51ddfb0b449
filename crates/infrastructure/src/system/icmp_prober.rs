use async_trait::async_trait;
use pingable_hosts_application::ports::ReachabilityProber;
use pingable_hosts_domain::{DomainError, ProbeResult, ProbeTarget};
use std::io;
use std::net::IpAddr;
use std::sync::atomic::{AtomicU16, Ordering};
use surge_ping::{Client, Config, PingIdentifier, PingSequence, SurgeError, ICMP};
use tokio::sync::OnceCell;
use tracing::debug;

const ECHO_PAYLOAD: [u8; 56] = [0; 56];

/// Single-packet ICMP echo prober.
///
/// One ICMP socket per address family is opened on first use and shared by
/// all later probes. Failing to open it means the process lacks the
/// privilege for ICMP, which is reported as `DomainError::ProbeSetup`.
///
/// Unprivileged datagram sockets match replies on address and sequence only,
/// so every probe takes its own sequence number.
pub struct IcmpProber {
    v4: OnceCell<Client>,
    v6: OnceCell<Client>,
    sequence: AtomicU16,
}

impl IcmpProber {
    pub fn new() -> Self {
        Self {
            v4: OnceCell::new(),
            v6: OnceCell::new(),
            sequence: AtomicU16::new(0),
        }
    }

    fn next_sequence(&self) -> PingSequence {
        PingSequence(self.sequence.fetch_add(1, Ordering::Relaxed))
    }

    async fn client_for(&self, ip: &IpAddr) -> Result<&Client, DomainError> {
        let (cell, kind) = match ip {
            IpAddr::V4(_) => (&self.v4, ICMP::V4),
            IpAddr::V6(_) => (&self.v6, ICMP::V6),
        };

        cell.get_or_try_init(|| async move {
            Client::new(&Config::builder().kind(kind).build()).map_err(|e| {
                DomainError::ProbeSetup(format!(
                    "cannot open ICMP socket ({}); run with elevated privileges",
                    e
                ))
            })
        })
        .await
    }
}

impl Default for IcmpProber {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReachabilityProber for IcmpProber {
    async fn probe(&self, target: ProbeTarget) -> Result<ProbeResult, DomainError> {
        let ip: IpAddr = target
            .address
            .parse()
            .map_err(|_| DomainError::InvalidAddress(target.address.clone()))?;

        let client = self.client_for(&ip).await?;
        let mut pinger = client.pinger(ip, PingIdentifier(fastrand::u16(..))).await;
        pinger.timeout(target.timeout);

        match pinger.ping(self.next_sequence(), &ECHO_PAYLOAD).await {
            Ok((_, rtt)) => {
                debug!(address = %ip, rtt_ms = rtt.as_secs_f64() * 1000.0, "Echo reply");
                Ok(ProbeResult::reachable(target.address))
            }
            Err(SurgeError::Timeout { .. }) => Ok(ProbeResult::unreachable(target.address)),
            Err(SurgeError::IOError(e)) if e.kind() == io::ErrorKind::PermissionDenied => {
                Err(DomainError::ProbeSetup(format!(
                    "sending ICMP echo to {} not permitted: {}",
                    ip, e
                )))
            }
            Err(e) => {
                debug!(address = %ip, error = %e, "Echo request failed");
                Ok(ProbeResult::unreachable(target.address))
            }
        }
    }
}
