use std::time::Duration;

/// A single reachability check: one echo request to `address`, waiting at
/// most `timeout` for the reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeTarget {
    pub address: String,
    pub timeout: Duration,
}

impl ProbeTarget {
    pub fn new(address: impl Into<String>, timeout: Duration) -> Self {
        Self {
            address: address.into(),
            timeout,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    pub address: String,
    pub reachable: bool,
}

impl ProbeResult {
    pub fn reachable(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            reachable: true,
        }
    }

    pub fn unreachable(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            reachable: false,
        }
    }
}
