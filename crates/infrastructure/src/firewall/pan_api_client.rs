use super::arp_response_parser::{error_message, parse_arp_response};
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use pingable_hosts_application::ports::ArpRecordSource;
use pingable_hosts_domain::config::FirewallConfig;
use pingable_hosts_domain::{ArpRecord, DomainError};
use reqwest::header::AUTHORIZATION;
use std::time::Duration;
use tracing::{debug, info};

/// Operational command listing every ARP entry on every interface
pub const SHOW_ARP_ALL_CMD: &str = "<show><arp><entry name = 'all'/></arp></show>";

/// Reads the ARP cache of a Palo Alto Networks firewall through its XML API.
pub struct PanOsArpSource {
    client: reqwest::Client,
    host: String,
    url: String,
    user: String,
    password: String,
}

impl PanOsArpSource {
    pub fn new(config: &FirewallConfig) -> Result<Self, DomainError> {
        let password = config.password.clone().ok_or_else(|| {
            DomainError::Config(format!("No password configured for user '{}'", config.user))
        })?;

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .danger_accept_invalid_certs(!config.verify_tls)
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| DomainError::Retrieval(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            host: config.host.clone(),
            url: config.api_url(),
            user: config.user.clone(),
            password,
        })
    }

    fn build_request(&self) -> Result<reqwest::Request, DomainError> {
        self.client
            .get(&self.url)
            .header(AUTHORIZATION, basic_auth_value(&self.user, &self.password))
            .query(&[("type", "op"), ("cmd", SHOW_ARP_ALL_CMD)])
            .build()
            .map_err(|e| DomainError::Retrieval(format!("Invalid request to {}: {}", self.url, e)))
    }
}

fn http_error(host: &str, status: reqwest::StatusCode, body: &str) -> DomainError {
    let detail = error_message(body)
        .or_else(|| status.canonical_reason().map(str::to_string))
        .unwrap_or_else(|| "Unknown".to_string());
    DomainError::Retrieval(format!(
        "{} returned HTTP {}: {}",
        host,
        status.as_u16(),
        detail
    ))
}

fn basic_auth_value(user: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{}:{}", user, password)))
}

#[async_trait]
impl ArpRecordSource for PanOsArpSource {
    async fn fetch_arp_records(&self) -> Result<Vec<ArpRecord>, DomainError> {
        let request = self.build_request()?;
        debug!(url = %self.url, user = %self.user, "Requesting ARP cache");

        let response = self.client.execute(request).await.map_err(|e| {
            DomainError::Retrieval(format!("Request to {} failed: {}", self.host, e))
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(http_error(&self.host, status, &body));
        }

        let body = response.text().await.map_err(|e| {
            DomainError::Retrieval(format!("Failed to read response from {}: {}", self.host, e))
        })?;

        let records = parse_arp_response(&body)?;
        info!(host = %self.host, entries = records.len(), "ARP cache downloaded");
        Ok(records)
    }

    fn describe(&self) -> String {
        self.host.clone()
    }
}
