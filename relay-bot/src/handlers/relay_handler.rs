//! Relay dispatcher: forwards user messages into the admin group and routes admin replies back.
//!
//! Transport failures are logged and the message is dropped; nothing is retried and nothing is
//! reported to the user.

use async_trait::async_trait;
use relay_core::{
    Bot, Content, Delivery, Handler, HandlerResponse, Media, MediaKind, Message, Result,
};
use std::sync::Arc;
use tracing::{debug, error, info, instrument};

use crate::routes::RouteTable;

/// Where an incoming message goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// From outside the admin group: forward to admins.
    UserMessage,
    /// A reply inside the admin group: deliver to the user behind `reply_to`.
    AdminReply { reply_to: i32 },
    /// Bot traffic, or admin-group chatter that replies to nothing.
    Ignored,
}

impl Route {
    pub fn classify(message: &Message, admin_chat_id: i64) -> Self {
        if message.user.is_bot {
            return Route::Ignored;
        }
        if message.chat.id != admin_chat_id {
            return Route::UserMessage;
        }
        match message.reply_to_message_id {
            Some(reply_to) => Route::AdminReply { reply_to },
            None => Route::Ignored,
        }
    }
}

/// What to post: plain text, or a stored file re-sent with a caption.
#[derive(Debug, PartialEq, Eq)]
enum Outgoing<'a> {
    Text(String),
    Media {
        media: &'a Media,
        caption: Option<String>,
    },
}

/// Builds the admin-group copy of a user's message, naming the sender and their chat id.
fn forward_payload(message: &Message) -> Outgoing<'_> {
    let sender = message.user.display_name();
    let chat_id = message.chat.id;

    match &message.content {
        Content::Text(text) => Outgoing::Text(format!(
            "📩 Message from @{} (ID: {}):\n\n{}",
            sender, chat_id, text
        )),
        Content::Media(media) => {
            let user_caption = media.caption.as_deref().unwrap_or("");
            let caption = match media.kind {
                MediaKind::Photo => Some(format!(
                    "📩 Photo from @{} (ID: {})\n{}",
                    sender, chat_id, user_caption
                )),
                MediaKind::Document => Some(format!(
                    "📩 Document from @{} (ID: {})\n{}",
                    sender, chat_id, user_caption
                )),
                MediaKind::Sticker => None,
                MediaKind::Audio | MediaKind::Voice | MediaKind::Video => media.caption.clone(),
            };
            Outgoing::Media { media, caption }
        }
        Content::Unsupported => Outgoing::Text(format!(
            "📩 Message from @{} (ID: {})\n[Unsupported message type]",
            sender, chat_id
        )),
    }
}

/// Builds what the user receives for an admin reply.
fn reply_payload(message: &Message) -> Outgoing<'_> {
    match &message.content {
        Content::Text(text) => Outgoing::Text(format!("💬 Admin reply:\n{}", text)),
        Content::Media(media) => Outgoing::Media {
            media,
            caption: media.caption.clone(),
        },
        Content::Unsupported => Outgoing::Text("[Admin sent unsupported message type]".to_string()),
    }
}

/// Terminal handler of the relay chain.
pub struct RelayHandler {
    bot: Arc<dyn Bot>,
    admin_chat_id: i64,
    routes: RouteTable,
}

impl RelayHandler {
    pub fn new(bot: Arc<dyn Bot>, admin_chat_id: i64, routes: RouteTable) -> Self {
        Self {
            bot,
            admin_chat_id,
            routes,
        }
    }

    async fn send(&self, chat_id: i64, outgoing: Outgoing<'_>) -> Result<i32> {
        match outgoing {
            Outgoing::Text(text) => self.bot.send_message(chat_id, &text).await,
            Outgoing::Media { media, caption } => {
                self.bot
                    .send_media(chat_id, media, caption.as_deref())
                    .await
            }
        }
    }

    /// Posts the message into the admin group and records which user it came from.
    #[instrument(skip(self, message), fields(user_chat_id = message.chat.id))]
    async fn forward_to_admin(&self, message: &Message) -> HandlerResponse {
        let user_chat_id = message.chat.id;

        match self.send(self.admin_chat_id, forward_payload(message)).await {
            Ok(admin_message_id) => {
                self.routes.record(admin_message_id, user_chat_id).await;
                let routes = self.routes.len().await;
                info!(
                    user_chat_id,
                    admin_message_id,
                    routes,
                    "Message from user forwarded to admin group"
                );
                HandlerResponse::Relayed(Delivery {
                    chat_id: self.admin_chat_id,
                    message_id: admin_message_id,
                })
            }
            Err(e) => {
                error!(error = %e, user_chat_id, "Error forwarding message");
                HandlerResponse::Stop
            }
        }
    }

    /// Sends an admin reply to the user behind `reply_to`; unknown targets are ignored.
    #[instrument(skip(self, message))]
    async fn deliver_reply(&self, message: &Message, reply_to: i32) -> HandlerResponse {
        let Some(user_chat_id) = self.routes.lookup(reply_to).await else {
            debug!(reply_to, "Reply targets a message the relay did not forward; ignoring");
            return HandlerResponse::Ignore;
        };

        match self.send(user_chat_id, reply_payload(message)).await {
            Ok(message_id) => {
                info!(user_chat_id, "Admin reply sent to user");
                HandlerResponse::Relayed(Delivery {
                    chat_id: user_chat_id,
                    message_id,
                })
            }
            Err(e) => {
                error!(error = %e, user_chat_id, "Error sending admin reply");
                HandlerResponse::Stop
            }
        }
    }
}

#[async_trait]
impl Handler for RelayHandler {
    fn name(&self) -> &'static str {
        "relay"
    }

    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let response = match Route::classify(message, self.admin_chat_id) {
            Route::UserMessage => self.forward_to_admin(message).await,
            Route::AdminReply { reply_to } => self.deliver_reply(message, reply_to).await,
            Route::Ignored => HandlerResponse::Ignore,
        };
        Ok(response)
    }
}
