//! Relay configuration: Telegram access, admin destination, logging. Loaded from env.

mod relay_config;


pub use relay_config::{RelayConfig, DEFAULT_LOG_FILE};
