//! Stops the chain for messages sent by bots (including the relay itself).

use async_trait::async_trait;
use relay_core::{Handler, Message, Result};
use tracing::{debug, instrument};

pub struct BotFilterHandler;

#[async_trait]
impl Handler for BotFilterHandler {
    fn name(&self) -> &'static str {
        "bot_filter"
    }

    #[instrument(skip(self, message))]
    async fn before(&self, message: &Message) -> Result<bool> {
        if message.user.is_bot {
            debug!(user_id = message.user.id, chat_id = message.chat.id, "Ignoring bot message");
            return Ok(false);
        }
        Ok(true)
    }
}
