//! Wraps teloxide::Bot and implements [`relay_core::Bot`]. Production code sends messages via Telegram; tests can substitute another Bot impl.

use async_trait::async_trait;
use relay_core::{Bot as CoreBot, Media, MediaKind, RelayError, Result};
use teloxide::{
    prelude::*,
    types::{ChatId, FileId, InputFile},
    RequestError,
};

/// Builds a teloxide Bot for `token`, pointed at `api_url` when given (e.g. a local Bot API server).
pub fn build_teloxide_bot(token: &str, api_url: Option<&str>) -> Result<teloxide::Bot> {
    let bot = teloxide::Bot::new(token);
    match api_url {
        Some(url) => {
            let url = reqwest::Url::parse(url)
                .map_err(|e| RelayError::Config(format!("Invalid Telegram API URL {}: {}", url, e)))?;
            Ok(bot.set_api_url(url))
        }
        None => Ok(bot),
    }
}

/// Thin wrapper around teloxide::Bot that implements relay-core's Bot trait.
#[derive(Clone)]
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    pub(crate) fn teloxide(&self) -> &teloxide::Bot {
        &self.bot
    }
}

fn bot_error(e: RequestError) -> RelayError {
    RelayError::Bot(e.to_string())
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat_id: i64, text: &str) -> Result<i32> {
        let sent = self
            .bot
            .send_message(ChatId(chat_id), text.to_string())
            .await
            .map_err(bot_error)?;
        Ok(sent.id.0)
    }

    async fn send_media(&self, chat_id: i64, media: &Media, caption: Option<&str>) -> Result<i32> {
        let chat = ChatId(chat_id);
        let file = InputFile::file_id(FileId(media.file_id.clone()));
        let caption = caption
            .filter(|c| !c.is_empty() && media.kind.takes_caption())
            .map(str::to_string);

        // Empty captions are left unset rather than sent as "".
        macro_rules! send_with_caption {
            ($request:expr) => {
                match caption {
                    Some(caption) => $request.caption(caption).await,
                    None => $request.await,
                }
            };
        }

        let sent = match media.kind {
            MediaKind::Photo => send_with_caption!(self.bot.send_photo(chat, file)),
            MediaKind::Sticker => self.bot.send_sticker(chat, file).await,
            MediaKind::Document => send_with_caption!(self.bot.send_document(chat, file)),
            MediaKind::Audio => send_with_caption!(self.bot.send_audio(chat, file)),
            MediaKind::Voice => send_with_caption!(self.bot.send_voice(chat, file)),
            MediaKind::Video => send_with_caption!(self.bot.send_video(chat, file)),
        }
        .map_err(bot_error)?;

        Ok(sent.id.0)
    }
}
