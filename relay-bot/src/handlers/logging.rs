//! Logs each message in before() and the relay outcome in after(); always continues.

use async_trait::async_trait;
use relay_core::{Handler, HandlerResponse, Message, Result};
use tracing::{debug, info, instrument};

pub struct LoggingHandler;

#[async_trait]
impl Handler for LoggingHandler {
    fn name(&self) -> &'static str {
        "logging"
    }

    #[instrument(skip(self, message))]
    async fn before(&self, message: &Message) -> Result<bool> {
        debug!(
            user_id = message.user.id,
            username = %message.user.username.as_deref().unwrap_or("unknown"),
            chat_id = message.chat.id,
            chat_type = %message.chat.chat_type,
            content = message.content.kind_name(),
            reply_to = ?message.reply_to_message_id,
            "Processing message"
        );
        Ok(true)
    }

    #[instrument(skip(self, message, response))]
    async fn after(&self, message: &Message, response: &HandlerResponse) -> Result<()> {
        match response {
            HandlerResponse::Relayed(delivery) => info!(
                from_chat = message.chat.id,
                to_chat = delivery.chat_id,
                sent_message_id = delivery.message_id,
                "Message relayed"
            ),
            other => debug!(
                message_id = message.id,
                chat_id = message.chat.id,
                response = ?other,
                "Message not relayed"
            ),
        }
        Ok(())
    }
}
