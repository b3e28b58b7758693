//! Environment-derived configuration, validated once at startup.

use std::env;
use std::fmt;

use crate::core::error::WatchError;

/// Secrets for the two external services that require them.
///
/// Loaded once via [`Settings::from_env`]; a missing variable fails fast
/// instead of surfacing later as a request error.
pub struct Settings {
    /// Telegram bot token (`TELEGRAM_BOT_TOKEN`).
    pub telegram_bot_token: String,
    /// Destination chat identifier (`TELEGRAM_CHAT_ID`).
    pub telegram_chat_id: String,
    /// GNews API key (`NEWS_API_KEY`).
    pub news_api_key: String,
}

impl Settings {
    /// Read all required variables from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`WatchError::MissingEnv`] naming the first variable that is
    /// absent or empty.
    pub fn from_env() -> Result<Self, WatchError> {
        Ok(Self {
            telegram_bot_token: require("TELEGRAM_BOT_TOKEN")?,
            telegram_chat_id: require("TELEGRAM_CHAT_ID")?,
            news_api_key: require("NEWS_API_KEY")?,
        })
    }
}

fn require(name: &'static str) -> Result<String, WatchError> {
    match env::var(name) {
        Ok(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(WatchError::MissingEnv(name)),
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("telegram_bot_token", &"[REDACTED]")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .field("news_api_key", &"[REDACTED]")
            .finish()
    }
}
