mod config;
mod logging;

pub use config::{load_config, password_from_env};
pub use logging::init_logging;
