use anyhow::Result;
use handler_chain::HandlerChain;
use relay_core::{init_tracing, Bot, HandlerResponse, Message};
use relay_telegram::{build_teloxide_bot, run_polling, TelegramBotAdapter};
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info, instrument};

use crate::config::RelayConfig;
use crate::handlers::{BotFilterHandler, LoggingHandler, RelayHandler};
use crate::routes::RouteTable;

/// Logging → bot filter → relay dispatcher.
pub fn build_handler_chain(config: &RelayConfig, bot: Arc<dyn Bot>, routes: RouteTable) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(BotFilterHandler))
        .add_handler(Arc::new(RelayHandler::new(bot, config.admin_group_id, routes)))
}

/// RelayBot: config, route table, and handler chain. Polling and tests drive the same chain.
pub struct RelayBot {
    pub config: RelayConfig,
    pub routes: RouteTable,
    pub handler_chain: HandlerChain,
}

impl RelayBot {
    /// Creates a RelayBot that sends through `bot` (a Telegram adapter, or a mock in tests).
    pub fn new_with_bot(config: RelayConfig, bot: Arc<dyn Bot>) -> Self {
        let routes = RouteTable::new();
        let handler_chain = build_handler_chain(&config, bot, routes.clone());
        Self {
            config,
            routes,
            handler_chain,
        }
    }

    /// Drives the handler chain with a core Message, as the poller does. Chain errors are logged and read as Stop.
    pub async fn handle_core_message(&self, message: &Message) -> HandlerResponse {
        match self.handler_chain.handle(message).await {
            Ok(response) => response,
            Err(e) => {
                error!(error = %e, user_id = message.user.id, "Handler chain failed");
                HandlerResponse::Stop
            }
        }
    }

    /// Polls Telegram through `transport` and feeds every update through the chain until shutdown.
    pub async fn run(self, transport: TelegramBotAdapter) -> Result<()> {
        info!(
            admin_group_id = self.config.admin_group_id,
            custom_api_url = self.config.telegram_api_url.is_some(),
            log_file = ?self.config.log_file,
            "Initializing relay bot"
        );
        run_polling(&transport, self.handler_chain).await
    }
}

/// Main entry: validate config, init logging, connect to Telegram, then poll until shutdown.
#[instrument(skip(config), fields(admin_group_id = config.admin_group_id))]
pub async fn run_bot(config: RelayConfig) -> Result<()> {
    config.validate()?;
    init_tracing(config.log_file.as_deref().map(Path::new))?;

    let transport = TelegramBotAdapter::new(build_teloxide_bot(
        &config.bot_token,
        config.telegram_api_url.as_deref(),
    )?);
    let relay = RelayBot::new_with_bot(config, Arc::new(transport.clone()));
    relay.run(transport).await
}
