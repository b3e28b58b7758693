//! Alert delivery via the Telegram Bot API.

use crate::core::{WatchClient, WatchError, net};

/// Sends plain-text messages to one chat through a bot.
#[derive(Clone)]
pub struct Notifier {
    client: WatchClient,
    token: String,
    chat_id: String,
}

impl Notifier {
    /// Creates a notifier from a bot token and a destination chat id.
    pub fn new(
        client: &WatchClient,
        token: impl Into<String>,
        chat_id: impl Into<String>,
    ) -> Self {
        Self {
            client: client.clone(),
            token: token.into(),
            chat_id: chat_id.into(),
        }
    }

    /// Performs one `sendMessage` call. The response body is ignored.
    ///
    /// # Errors
    ///
    /// Returns a `WatchError` on transport failure or a non-2xx status.
    pub async fn send(&self, text: &str) -> Result<(), WatchError> {
        let url = self
            .client
            .base_telegram()
            .join(&format!("bot{}/sendMessage", self.token))?;

        let resp = self
            .client
            .http()
            .post(url)
            .form(&[("chat_id", self.chat_id.as_str()), ("text", text)])
            .send()
            .await?;
        net::ok(resp)?;
        Ok(())
    }

    /// Best-effort send: any failure is logged and swallowed.
    ///
    /// Every monitor call site uses this variant; a lost alert must never
    /// stop a sweep.
    pub async fn send_or_log(&self, text: &str) {
        if let Err(e) = self.send(text).await {
            tracing::warn!(error = %e, "telegram send failed");
        }
    }
}

impl std::fmt::Debug for Notifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Notifier")
            .field("token", &"[REDACTED]")
            .field("chat_id", &self.chat_id)
            .finish()
    }
}
