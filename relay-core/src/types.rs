//! Core types: user, chat, message content, handler response, and Handler trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User identity (id, username, names).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub is_bot: bool,
}

impl User {
    /// Placeholder for messages without a sender.
    pub fn unknown() -> Self {
        Self {
            id: 0,
            username: None,
            first_name: None,
            last_name: None,
            is_bot: false,
        }
    }

    /// Name shown to admins: username, else first name, else "Unknown".
    pub fn display_name(&self) -> &str {
        self.username
            .as_deref()
            .or(self.first_name.as_deref())
            .unwrap_or("Unknown")
    }
}

/// Chat (group or private) identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}

/// Kind of a file-backed message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaKind {
    Photo,
    Sticker,
    Document,
    Audio,
    Voice,
    Video,
}

impl MediaKind {
    /// Whether the transport accepts a caption for this kind.
    pub fn takes_caption(&self) -> bool {
        !matches!(self, MediaKind::Sticker)
    }
}

/// A file already stored by the transport, re-sendable by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Media {
    pub kind: MediaKind,
    pub file_id: String,
    pub caption: Option<String>,
}

/// Payload of a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Content {
    Text(String),
    Media(Media),
    /// Anything the relay does not know how to re-send (polls, locations, contacts...).
    Unsupported,
}

impl Content {
    pub fn text(&self) -> Option<&str> {
        match self {
            Content::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Short label for logs.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Content::Text(_) => "text",
            Content::Media(media) => match media.kind {
                MediaKind::Photo => "photo",
                MediaKind::Sticker => "sticker",
                MediaKind::Document => "document",
                MediaKind::Audio => "audio",
                MediaKind::Voice => "voice",
                MediaKind::Video => "video",
            },
            Content::Unsupported => "unsupported",
        }
    }
}

/// A single incoming message with user, chat, content, and optional reply target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: i32,
    pub user: User,
    pub chat: Chat,
    pub content: Content,
    pub created_at: DateTime<Utc>,
    /// Id of the message this one replies to, within the same chat.
    pub reply_to_message_id: Option<i32>,
}

/// A message the relay posted: destination chat and the id the transport assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delivery {
    pub chat_id: i64,
    pub message_id: i32,
}

/// Handler result for the chain. `Relayed` carries the produced delivery so later handlers can use it in `after()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// Stop the chain; nothing was delivered.
    Stop,
    /// Skip this handler, try next.
    Ignore,
    /// Stop the chain; the message was relayed.
    Relayed(Delivery),
}

/// Converts a transport-specific user type to core [`User`].
pub trait ToCoreUser: Send + Sync {
    fn to_core(&self) -> User;
}

/// Converts a transport-specific message type to core [`Message`].
pub trait ToCoreMessage: Send + Sync {
    fn to_core(&self) -> Message;
}

/// Single handler concept: optional before / handle / after. Chain runs all before → handle until Stop/Relayed → all after (reverse).
#[async_trait]
pub trait Handler: Send + Sync {
    /// Name used in chain logs. Defaults to the implementing type's path.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Runs before the handle phase. Return false to stop the chain.
    async fn before(&self, _message: &Message) -> crate::error::Result<bool> {
        Ok(true)
    }
    /// Processes the message. Return Stop or Relayed to end the handle phase. Default: Continue.
    async fn handle(&self, _message: &Message) -> crate::error::Result<HandlerResponse> {
        Ok(HandlerResponse::Continue)
    }
    /// Runs after the handle phase (reverse order), with the final response.
    async fn after(
        &self,
        _message: &Message,
        _response: &HandlerResponse,
    ) -> crate::error::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(username: Option<&str>, first_name: Option<&str>) -> User {
        User {
            id: 1,
            username: username.map(String::from),
            first_name: first_name.map(String::from),
            last_name: None,
            is_bot: false,
        }
    }

    #[test]
    fn test_handler_name_defaults_to_type_path() {
        struct PassThrough;
        impl Handler for PassThrough {}

        let handler: &dyn Handler = &PassThrough;
        assert!(handler.name().ends_with("PassThrough"));
    }

    #[test]
    fn test_display_name_prefers_username() {
        assert_eq!(user(Some("alice"), Some("Alice")).display_name(), "alice");
    }

    #[test]
    fn test_display_name_falls_back_to_first_name() {
        assert_eq!(user(None, Some("Alice")).display_name(), "Alice");
    }

    #[test]
    fn test_display_name_unknown() {
        assert_eq!(user(None, None).display_name(), "Unknown");
        assert_eq!(User::unknown().display_name(), "Unknown");
    }

    #[test]
    fn test_sticker_takes_no_caption() {
        assert!(!MediaKind::Sticker.takes_caption());
        assert!(MediaKind::Photo.takes_caption());
        assert!(MediaKind::Voice.takes_caption());
    }

    #[test]
    fn test_content_kind_name() {
        assert_eq!(Content::Text("hi".into()).kind_name(), "text");
        assert_eq!(Content::Unsupported.kind_name(), "unsupported");
        let doc = Content::Media(Media {
            kind: MediaKind::Document,
            file_id: "f".into(),
            caption: None,
        });
        assert_eq!(doc.kind_name(), "document");
        assert_eq!(doc.text(), None);
    }
}
