//! Adapters from Telegram (teloxide) types to relay_core types.
//! Depends only on teloxide and relay_core type definitions.

use relay_core::{Chat, Content, Media, MediaKind, Message, ToCoreMessage, ToCoreUser, User};

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
            is_bot: self.0.is_bot,
        }
    }
}

/// Wraps a teloxide Message for conversion to core [`Message`].
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> ToCoreMessage for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Message {
        Message {
            id: self.0.id.0,
            user: self
                .0
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or_else(User::unknown),
            chat: Chat {
                id: self.0.chat.id.0,
                chat_type: chat_type(&self.0.chat).to_string(),
            },
            content: self.content(),
            created_at: self.0.date,
            reply_to_message_id: self.0.reply_to_message().map(|m| m.id.0),
        }
    }
}

impl<'a> TelegramMessageWrapper<'a> {
    /// Text first, then the media kinds the relay can re-send by file id.
    fn content(&self) -> Content {
        let msg = self.0;
        if let Some(text) = msg.text() {
            return Content::Text(text.to_string());
        }

        let file = if let Some(photo) = msg.photo().and_then(|sizes| sizes.last()) {
            Some((MediaKind::Photo, photo.file.id.to_string()))
        } else if let Some(sticker) = msg.sticker() {
            Some((MediaKind::Sticker, sticker.file.id.to_string()))
        } else if let Some(document) = msg.document() {
            Some((MediaKind::Document, document.file.id.to_string()))
        } else if let Some(audio) = msg.audio() {
            Some((MediaKind::Audio, audio.file.id.to_string()))
        } else if let Some(voice) = msg.voice() {
            Some((MediaKind::Voice, voice.file.id.to_string()))
        } else {
            msg.video()
                .map(|video| (MediaKind::Video, video.file.id.to_string()))
        };

        match file {
            Some((kind, file_id)) => Content::Media(Media {
                kind,
                file_id,
                caption: msg.caption().map(str::to_string),
            }),
            None => Content::Unsupported,
        }
    }
}

fn chat_type(chat: &teloxide::types::Chat) -> &'static str {
    if chat.is_private() {
        "private"
    } else if chat.is_supergroup() {
        "supergroup"
    } else if chat.is_group() {
        "group"
    } else if chat.is_channel() {
        "channel"
    } else {
        "unknown"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> teloxide::types::Message {
        serde_json::from_str(json).expect("valid Bot API message")
    }

    /// **Test: TelegramUserWrapper converts teloxide User to core User with correct id, names and bot flag.**
    #[test]
    fn test_telegram_user_wrapper_to_core() {
        let user: teloxide::types::User = serde_json::from_str(
            r#"{"id": 123, "is_bot": false, "first_name": "Test", "last_name": "User", "username": "testuser"}"#,
        )
        .unwrap();

        let core_user = TelegramUserWrapper(&user).to_core();

        assert_eq!(core_user.id, 123);
        assert_eq!(core_user.username, Some("testuser".to_string()));
        assert_eq!(core_user.first_name, Some("Test".to_string()));
        assert_eq!(core_user.last_name, Some("User".to_string()));
        assert!(!core_user.is_bot);
    }

    #[test]
    fn test_text_message_to_core() {
        let msg = parse(
            r#"{
                "message_id": 10,
                "date": 1706529600,
                "chat": {"id": 555, "type": "private", "first_name": "Alice"},
                "from": {"id": 555, "is_bot": false, "first_name": "Alice", "username": "alice"},
                "text": "hello admins"
            }"#,
        );

        let core = TelegramMessageWrapper(&msg).to_core();

        assert_eq!(core.id, 10);
        assert_eq!(core.chat.id, 555);
        assert_eq!(core.chat.chat_type, "private");
        assert_eq!(core.user.username.as_deref(), Some("alice"));
        assert_eq!(core.content, Content::Text("hello admins".to_string()));
        assert_eq!(core.reply_to_message_id, None);
    }

    #[test]
    fn test_photo_uses_largest_size_and_caption() {
        let msg = parse(
            r#"{
                "message_id": 11,
                "date": 1706529600,
                "chat": {"id": 555, "type": "private", "first_name": "Alice"},
                "from": {"id": 555, "is_bot": false, "first_name": "Alice"},
                "photo": [
                    {"file_id": "small", "file_unique_id": "s1", "width": 90, "height": 90, "file_size": 100},
                    {"file_id": "large", "file_unique_id": "l1", "width": 800, "height": 800, "file_size": 5000}
                ],
                "caption": "look"
            }"#,
        );

        let core = TelegramMessageWrapper(&msg).to_core();

        assert_eq!(
            core.content,
            Content::Media(Media {
                kind: MediaKind::Photo,
                file_id: "large".to_string(),
                caption: Some("look".to_string()),
            })
        );
    }

    #[test]
    fn test_admin_reply_carries_reply_target() {
        let msg = parse(
            r#"{
                "message_id": 90,
                "date": 1706529700,
                "chat": {"id": -1001234, "type": "supergroup", "title": "Admins"},
                "from": {"id": 42, "is_bot": false, "first_name": "Admin"},
                "text": "thanks, fixed",
                "reply_to_message": {
                    "message_id": 77,
                    "date": 1706529650,
                    "chat": {"id": -1001234, "type": "supergroup", "title": "Admins"},
                    "from": {"id": 999, "is_bot": true, "first_name": "RelayBot", "username": "relay_bot"},
                    "text": "forwarded"
                }
            }"#,
        );

        let core = TelegramMessageWrapper(&msg).to_core();

        assert_eq!(core.chat.id, -1001234);
        assert_eq!(core.chat.chat_type, "supergroup");
        assert_eq!(core.reply_to_message_id, Some(77));
        assert_eq!(core.content.text(), Some("thanks, fixed"));
    }

    #[test]
    fn test_unknown_content_is_unsupported() {
        let msg = parse(
            r#"{
                "message_id": 12,
                "date": 1706529600,
                "chat": {"id": 555, "type": "private", "first_name": "Alice"},
                "from": {"id": 555, "is_bot": false, "first_name": "Alice"},
                "location": {"latitude": 52.52, "longitude": 13.40}
            }"#,
        );

        let core = TelegramMessageWrapper(&msg).to_core();

        assert_eq!(core.content, Content::Unsupported);
    }
}
