//! # relay-telegram
//!
//! Telegram transport layer: adapters, [`relay_core::Bot`] implementation, polling runner.
//! Handles only Telegram connectivity and handler-chain execution; no routing logic.

mod adapters;
mod bot_adapter;
mod runner;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::{build_teloxide_bot, TelegramBotAdapter};
pub use runner::run_polling;
