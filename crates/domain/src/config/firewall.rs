use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FirewallConfig {
    /// Management hostname or address of the firewall
    #[serde(default)]
    pub host: String,

    #[serde(default)]
    pub user: String,

    #[serde(default, skip_serializing)]
    pub password: Option<String>,

    #[serde(default = "default_api_path")]
    pub api_path: String,

    /// Firewalls usually present self-signed management certificates, so
    /// verification is opt-in.
    #[serde(default)]
    pub verify_tls: bool,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for FirewallConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            user: String::new(),
            password: None,
            api_path: default_api_path(),
            verify_tls: false,
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl FirewallConfig {
    pub fn api_url(&self) -> String {
        format!("https://{}{}", self.host, self.api_path)
    }
}

fn default_api_path() -> String {
    "/api/".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}
