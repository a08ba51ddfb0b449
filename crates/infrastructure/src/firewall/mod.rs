pub mod arp_response_parser;
pub mod pan_api_client;

pub use arp_response_parser::{error_message, parse_arp_response};
pub use pan_api_client::PanOsArpSource;
