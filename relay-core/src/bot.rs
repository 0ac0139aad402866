//! Bot abstraction for posting messages.
//!
//! [`Bot`] is transport-agnostic; relay-telegram implements it via teloxide. Every send returns the
//! id of the message the transport created, which the relay uses to correlate admin replies.

use crate::error::Result;
use crate::types::Media;
use async_trait::async_trait;

/// Abstraction for sending messages. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat and returns the id of the sent message.
    async fn send_message(&self, chat_id: i64, text: &str) -> Result<i32>;

    /// Re-sends a media file (by transport file id) to the given chat with an optional caption.
    /// Returns the id of the sent message. Captions are dropped for media kinds that take none.
    async fn send_media(&self, chat_id: i64, media: &Media, caption: Option<&str>) -> Result<i32>;
}
