//! Polling runner: converts teloxide messages to relay_core::Message and passes them to HandlerChain.

use anyhow::Result;
use handler_chain::HandlerChain;
use relay_core::ToCoreMessage;
use teloxide::prelude::*;
use tracing::{error, info, instrument, warn};

use super::adapters::TelegramMessageWrapper;
use super::bot_adapter::TelegramBotAdapter;

/// Starts long polling on the adapter's teloxide Bot and runs each update through HandlerChain.
/// Calls get_me() first to log the bot identity; each message is converted to core::Message and run
/// through the chain to completion. Chain errors are logged and the next update is processed.
#[instrument(skip(transport, handler_chain))]
pub async fn run_polling(transport: &TelegramBotAdapter, handler_chain: HandlerChain) -> Result<()> {
    let bot = transport.teloxide().clone();

    match bot.get_me().await {
        Ok(me) => info!(
            bot_id = me.user.id.0,
            username = ?me.user.username,
            "Bot is running in polling mode"
        ),
        Err(e) => warn!(error = %e, "getMe failed; starting polling anyway"),
    }

    teloxide::repl(bot, move |msg: Message| {
        let chain = handler_chain.clone();

        async move {
            let core_msg = TelegramMessageWrapper(&msg).to_core();

            info!(
                user_id = core_msg.user.id,
                chat_id = core_msg.chat.id,
                message_id = core_msg.id,
                content = core_msg.content.kind_name(),
                "Received message"
            );

            if let Err(e) = chain.handle(&core_msg).await {
                error!(error = %e, user_id = core_msg.user.id, "Handler chain failed");
            }

            respond(())
        }
    })
    .await;

    Ok(())
}
