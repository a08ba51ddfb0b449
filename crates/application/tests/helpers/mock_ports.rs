#![allow(dead_code)]

use async_trait::async_trait;
use pingable_hosts_application::ports::{ArpRecordSource, ReachabilityProber, StatusReporter};
use pingable_hosts_domain::{ArpRecord, DomainError, HarvestReport, ProbeResult, ProbeTarget};
use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::RwLock;

pub struct MockArpRecordSource {
    records: Vec<ArpRecord>,
    call_count: Arc<AtomicU64>,
    failure: Option<DomainError>,
}

impl MockArpRecordSource {
    pub fn with_records(entries: Vec<(&str, &str)>) -> Self {
        Self {
            records: entries
                .into_iter()
                .map(|(interface, address)| ArpRecord::new(interface, address))
                .collect(),
            call_count: Arc::new(AtomicU64::new(0)),
            failure: None,
        }
    }

    pub fn failing(error: DomainError) -> Self {
        Self {
            records: Vec::new(),
            call_count: Arc::new(AtomicU64::new(0)),
            failure: Some(error),
        }
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl ArpRecordSource for MockArpRecordSource {
    async fn fetch_arp_records(&self) -> Result<Vec<ArpRecord>, DomainError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(self.records.clone()),
        }
    }

    fn describe(&self) -> String {
        "mock-fw".to_string()
    }
}

/// Prober stub answering from a fixed set of reachable addresses.
pub struct MockProber {
    reachable: HashSet<String>,
    malformed: HashSet<String>,
    probed: Arc<RwLock<Vec<ProbeTarget>>>,
    call_count: Arc<AtomicU64>,
    setup_failure: Option<String>,
    delay: Option<Duration>,
}

impl MockProber {
    pub fn reachable(addresses: &[&str]) -> Self {
        Self {
            reachable: addresses.iter().map(|a| a.to_string()).collect(),
            malformed: HashSet::new(),
            probed: Arc::new(RwLock::new(Vec::new())),
            call_count: Arc::new(AtomicU64::new(0)),
            setup_failure: None,
            delay: None,
        }
    }

    pub fn without_privilege() -> Self {
        let mut prober = Self::reachable(&[]);
        prober.setup_failure = Some("Operation not permitted (os error 1)".to_string());
        prober
    }

    pub fn with_malformed(mut self, addresses: &[&str]) -> Self {
        self.malformed = addresses.iter().map(|a| a.to_string()).collect();
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }

    pub async fn probed_addresses(&self) -> Vec<String> {
        self.probed
            .read()
            .await
            .iter()
            .map(|t| t.address.clone())
            .collect()
    }

    pub async fn probed_targets(&self) -> Vec<ProbeTarget> {
        self.probed.read().await.clone()
    }
}

#[async_trait]
impl ReachabilityProber for MockProber {
    async fn probe(&self, target: ProbeTarget) -> Result<ProbeResult, DomainError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        self.probed.write().await.push(target.clone());

        if let Some(reason) = &self.setup_failure {
            return Err(DomainError::ProbeSetup(reason.clone()));
        }
        if self.malformed.contains(&target.address) {
            return Err(DomainError::InvalidAddress(target.address));
        }
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if self.reachable.contains(&target.address) {
            Ok(ProbeResult::reachable(target.address))
        } else {
            Ok(ProbeResult::unreachable(target.address))
        }
    }
}

/// Records reporter calls as short event strings.
#[derive(Default)]
pub struct RecordingReporter {
    events: Mutex<Vec<String>>,
}

impl RecordingReporter {
    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

impl StatusReporter for RecordingReporter {
    fn step_started(&self, description: &str) {
        self.events
            .lock()
            .unwrap()
            .push(format!("start:{}", description));
    }

    fn step_succeeded(&self) {
        self.events.lock().unwrap().push("success".to_string());
    }

    fn step_failed(&self) {
        self.events.lock().unwrap().push("fail".to_string());
    }

    fn finished(&self, report: &HarvestReport) {
        self.events
            .lock()
            .unwrap()
            .push(format!("finished:{}", report.addresses.len()));
    }
}
