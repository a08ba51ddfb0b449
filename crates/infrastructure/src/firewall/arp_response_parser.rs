//! Decoder for the PAN-OS XML API reply to `<show><arp><entry name = 'all'/></arp></show>`.
//!
//! ```text
//! <response status="success">
//!   <result>
//!     <max>3000</max><total>2</total>
//!     <entries>
//!       <entry>
//!         <status>c</status><ip>10.0.0.1</ip><mac>00:50:56:aa:bb:cc</mac>
//!         <ttl>1800</ttl><interface>ethernet1/1</interface><port>ethernet1/1</port>
//!       </entry>
//!     </entries>
//!   </result>
//! </response>
//! ```

use pingable_hosts_domain::{ArpRecord, DomainError};
use quick_xml::events::Event;
use quick_xml::Reader;
use serde::Deserialize;
use tracing::debug;

const STATUS_SUCCESS: &str = "success";

/// Only the envelope attributes; the message of an error reply is read
/// separately by [`error_message`].
#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(rename = "@status")]
    status: String,
    #[serde(rename = "@code", default)]
    code: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ArpResponse {
    #[serde(default)]
    result: ArpResult,
}

#[derive(Debug, Default, Deserialize)]
struct ArpResult {
    #[serde(default)]
    entries: ArpEntries,
}

#[derive(Debug, Default, Deserialize)]
struct ArpEntries {
    #[serde(default)]
    entry: Vec<ArpEntry>,
}

#[derive(Debug, Deserialize)]
struct ArpEntry {
    interface: String,
    ip: String,
}

/// Decodes the ARP entries in document order.
pub fn parse_arp_response(body: &str) -> Result<Vec<ArpRecord>, DomainError> {
    let envelope: Envelope =
        quick_xml::de::from_str(body).map_err(|e| DomainError::Parse(e.to_string()))?;

    if envelope.status != STATUS_SUCCESS {
        let code = envelope
            .code
            .map(|c| format!(" (code {})", c))
            .unwrap_or_default();
        let message = error_message(body)
            .map(|m| format!(": {}", m))
            .unwrap_or_default();
        return Err(DomainError::Retrieval(format!(
            "firewall returned status '{}'{}{}",
            envelope.status, code, message
        )));
    }

    let response: ArpResponse =
        quick_xml::de::from_str(body).map_err(|e| DomainError::Parse(e.to_string()))?;

    let records: Vec<ArpRecord> = response
        .result
        .entries
        .entry
        .into_iter()
        .map(|entry| ArpRecord::new(entry.interface.trim(), entry.ip.trim()))
        .collect();

    debug!(entries = records.len(), "ARP response parsed");
    Ok(records)
}

/// Text of the `<msg>` element of a PAN-OS reply, found either directly
/// (`<result><msg>..</msg></result>`) or split into `<line>` children
/// (`<msg><line>..</line></msg>`). Lines are joined with `"; "`.
pub fn error_message(body: &str) -> Option<String> {
    let mut reader = Reader::from_str(body);
    reader.config_mut().trim_text(true);

    let mut depth = 0usize;
    let mut lines: Vec<String> = Vec::new();
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.name().as_ref() == b"msg" => depth += 1,
            Ok(Event::End(e)) if e.name().as_ref() == b"msg" => {
                depth = depth.saturating_sub(1)
            }
            Ok(Event::Text(t)) if depth > 0 => {
                if let Ok(text) = t.unescape() {
                    lines.push(text.trim().to_string());
                }
            }
            Ok(Event::CData(c)) if depth > 0 => {
                lines.push(String::from_utf8_lossy(&c).trim().to_string());
            }
            Ok(Event::Eof) | Err(_) => break,
            _ => {}
        }
    }

    lines.retain(|l| !l.is_empty());
    if lines.is_empty() {
        None
    } else {
        Some(lines.join("; "))
    }
}
