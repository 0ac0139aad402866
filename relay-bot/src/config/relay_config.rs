use relay_core::{RelayError, Result};
use std::env;
use std::fmt;

pub const DEFAULT_LOG_FILE: &str = "logs/relay-bot.log";

/// Relay config. BOT_TOKEN and ADMIN_GROUP_ID are mandatory; the rest has defaults.
#[derive(Clone)]
pub struct RelayConfig {
    /// BOT_TOKEN
    pub bot_token: String,
    /// ADMIN_GROUP_ID: chat that receives forwarded messages and whose replies are routed back
    pub admin_group_id: i64,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL
    pub telegram_api_url: Option<String>,
    /// LOG_FILE; defaults to DEFAULT_LOG_FILE, an empty value disables file logging
    pub log_file: Option<String>,
}

impl RelayConfig {
    /// Load from environment variables. `token` and `admin_group_id` override the env values if provided.
    pub fn load(token: Option<String>, admin_group_id: Option<i64>) -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok(), token, admin_group_id)
    }

    /// Load from an arbitrary variable source (env in production, a map in tests).
    pub fn from_lookup<F>(lookup: F, token: Option<String>, admin_group_id: Option<i64>) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bot_token = token
            .or_else(|| lookup("BOT_TOKEN"))
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| RelayError::Config("BOT_TOKEN not set".to_string()))?;

        let admin_group_id = match admin_group_id {
            Some(id) => id,
            None => {
                let raw = lookup("ADMIN_GROUP_ID")
                    .filter(|v| !v.trim().is_empty())
                    .ok_or_else(|| RelayError::Config("ADMIN_GROUP_ID not set".to_string()))?;
                parse_chat_id(&raw)?
            }
        };
        if admin_group_id == 0 {
            return Err(RelayError::Config(
                "ADMIN_GROUP_ID must be a non-zero chat id".to_string(),
            ));
        }

        let telegram_api_url = lookup("TELEGRAM_API_URL").or_else(|| lookup("TELOXIDE_API_URL"));
        let log_file = match lookup("LOG_FILE") {
            Some(path) if path.trim().is_empty() => None,
            Some(path) => Some(path),
            None => Some(DEFAULT_LOG_FILE.to_string()),
        };

        Ok(Self {
            bot_token,
            admin_group_id,
            telegram_api_url,
            log_file,
        })
    }

    /// Validate config (e.g. telegram_api_url must be valid URL if set). Call after load to fail fast before init.
    pub fn validate(&self) -> Result<()> {
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                return Err(RelayError::Config(format!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                )));
            }
        }
        Ok(())
    }
}

fn parse_chat_id(raw: &str) -> Result<i64> {
    raw.trim().parse().map_err(|_| {
        RelayError::Config(format!("ADMIN_GROUP_ID is not a valid chat id: {}", raw))
    })
}

// Keeps the token out of logs.
impl fmt::Debug for RelayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelayConfig")
            .field("bot_token", &"<redacted>")
            .field("admin_group_id", &self.admin_group_id)
            .field("telegram_api_url", &self.telegram_api_url)
            .field("log_file", &self.log_file)
            .finish()
    }
}
