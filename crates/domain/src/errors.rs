use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("ARP cache retrieval failed: {0}")]
    Retrieval(String),

    #[error("Failed to parse ARP cache response: {0}")]
    Parse(String),

    /// The probing mechanism itself is unusable (e.g. no permission to open
    /// an ICMP socket). Every later probe would fail the same way.
    #[error("ICMP probing unavailable: {0}")]
    ProbeSetup(String),

    #[error("Invalid IP address: {0}")]
    InvalidAddress(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
