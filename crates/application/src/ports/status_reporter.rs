use pingable_hosts_domain::HarvestReport;

/// Progress output for an interactive run. Implementations must never write
/// to the stream that carries result lines.
pub trait StatusReporter: Send + Sync {
    fn step_started(&self, description: &str);

    fn step_succeeded(&self);

    fn step_failed(&self);

    fn finished(&self, report: &HarvestReport);
}
