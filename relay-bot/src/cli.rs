//! CLI parser and config loading.

use clap::{Parser, Subcommand};
use relay_core::Result;

use crate::config::RelayConfig;

#[derive(Parser)]
#[command(name = "relay-bot")]
#[command(about = "Anonymous Telegram relay bot", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the relay (config from env; flags override BOT_TOKEN / ADMIN_GROUP_ID).
    Run {
        #[arg(short, long)]
        token: Option<String>,
        #[arg(short, long, allow_negative_numbers = true)]
        admin_group_id: Option<i64>,
    },
}

/// Load RelayConfig from environment. Provided values override BOT_TOKEN / ADMIN_GROUP_ID.
pub fn load_config(token: Option<String>, admin_group_id: Option<i64>) -> Result<RelayConfig> {
    RelayConfig::load(token, admin_group_id)
}
