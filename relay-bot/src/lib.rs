//! # Relay bot application
//!
//! Forwards messages from end users into a single admin group and routes admin replies back to the
//! originating user. Wires relay-core, handler-chain and relay-telegram; loads config from env and
//! runs long polling.

pub mod cli;
pub mod config;
pub mod handlers;
pub mod routes;
pub mod runner;

pub use cli::{load_config, Cli, Commands};
pub use config::RelayConfig;
pub use handlers::{BotFilterHandler, LoggingHandler, RelayHandler, Route};
pub use routes::RouteTable;
pub use runner::{build_handler_chain, run_bot, RelayBot};
