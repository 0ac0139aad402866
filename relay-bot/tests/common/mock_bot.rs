//! Mock implementation of [`relay_core::Bot`] for integration tests.
//!
//! Records every send and hands out increasing message ids, so tests can assert on what was posted
//! where and reply to it without hitting Telegram.

use async_trait::async_trait;
use relay_core::{Bot, Media, RelayError, Result};
use std::collections::HashSet;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Mutex;

/// One recorded send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sent {
    Text {
        chat_id: i64,
        message_id: i32,
        text: String,
    },
    Media {
        chat_id: i64,
        message_id: i32,
        media: Media,
        caption: Option<String>,
    },
}

impl Sent {
    pub fn chat_id(&self) -> i64 {
        match self {
            Sent::Text { chat_id, .. } | Sent::Media { chat_id, .. } => *chat_id,
        }
    }

    pub fn message_id(&self) -> i32 {
        match self {
            Sent::Text { message_id, .. } | Sent::Media { message_id, .. } => *message_id,
        }
    }
}

/// Mock Bot that records sends; sends to chats in `failing_chats` return a Bot error.
pub struct MockBot {
    next_id: AtomicI32,
    sent: Mutex<Vec<Sent>>,
    failing_chats: Mutex<HashSet<i64>>,
}

impl MockBot {
    /// First sent message gets id 100.
    pub fn new() -> Self {
        Self {
            next_id: AtomicI32::new(100),
            sent: Mutex::new(Vec::new()),
            failing_chats: Mutex::new(HashSet::new()),
        }
    }

    /// Makes every later send to `chat_id` fail (e.g. the user blocked the bot).
    pub fn fail_sends_to(&self, chat_id: i64) {
        self.failing_chats.lock().unwrap().insert(chat_id);
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    pub fn last_sent(&self) -> Option<Sent> {
        self.sent.lock().unwrap().last().cloned()
    }

    fn check(&self, chat_id: i64) -> Result<i32> {
        if self.failing_chats.lock().unwrap().contains(&chat_id) {
            return Err(RelayError::Bot(format!("Forbidden: chat {} unreachable", chat_id)));
        }
        Ok(self.next_id.fetch_add(1, Ordering::SeqCst))
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat_id: i64, text: &str) -> Result<i32> {
        let message_id = self.check(chat_id)?;
        self.sent.lock().unwrap().push(Sent::Text {
            chat_id,
            message_id,
            text: text.to_string(),
        });
        Ok(message_id)
    }

    async fn send_media(&self, chat_id: i64, media: &Media, caption: Option<&str>) -> Result<i32> {
        let message_id = self.check(chat_id)?;
        self.sent.lock().unwrap().push(Sent::Media {
            chat_id,
            message_id,
            media: media.clone(),
            caption: caption.map(str::to_string),
        });
        Ok(message_id)
    }
}
