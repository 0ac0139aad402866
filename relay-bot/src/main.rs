//! Binary for the anonymous relay bot.

use anyhow::{Context, Result};
use clap::Parser;
use relay_bot::{load_config, run_bot, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            token,
            admin_group_id,
        } => {
            let config = load_config(token, admin_group_id)
                .context("Failed to load relay config (BOT_TOKEN / ADMIN_GROUP_ID from .env or environment)")?;
            run_bot(config).await
        }
    }
}
