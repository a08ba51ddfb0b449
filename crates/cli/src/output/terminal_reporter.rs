use colored::Colorize;
use pingable_hosts_application::ports::StatusReporter;
use pingable_hosts_domain::HarvestReport;

/// Step-by-step progress on stderr.
pub struct TerminalReporter;

impl StatusReporter for TerminalReporter {
    fn step_started(&self, description: &str) {
        eprint!("{} ... ", description);
    }

    fn step_succeeded(&self) {
        eprintln!("{}", "success".green());
    }

    fn step_failed(&self) {
        eprintln!("{}\n", "fail".red());
    }

    fn finished(&self, report: &HarvestReport) {
        eprintln!();
        eprintln!(
            " Collection complete: Discovered {} pingable addresses in {:.3} seconds",
            report.addresses.len(),
            report.elapsed.as_secs_f64()
        );
    }
}
