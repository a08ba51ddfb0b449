mod arp_record_source;
mod reachability_prober;
mod status_reporter;

pub use arp_record_source::ArpRecordSource;
pub use reachability_prober::ReachabilityProber;
pub use status_reporter::StatusReporter;
