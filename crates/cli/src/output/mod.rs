mod results;
mod terminal_reporter;

pub use results::write_addresses;
pub use terminal_reporter::TerminalReporter;
