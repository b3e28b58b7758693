//! Public client surface + builder.
//!
//! One `WatchClient` is shared by every outbound call so that tests can point
//! all three endpoints (chart, news, Telegram) at a local mock server.

use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::core::error::WatchError;

/// Default desktop UA to avoid trivial bot blocking on the chart endpoint.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (X11; Linux x86_64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/122.0.0.0 Safari/537.36"
);

/// Yahoo chart API base (symbol is appended).
pub(crate) const DEFAULT_BASE_CHART: &str = "https://query1.finance.yahoo.com/v8/finance/chart/";

/// GNews API base (`search` is appended).
pub(crate) const DEFAULT_BASE_NEWS: &str = "https://gnews.io/api/v4/";

/// Telegram Bot API base (`bot<token>/sendMessage` is appended).
pub(crate) const DEFAULT_BASE_TELEGRAM: &str = "https://api.telegram.org/";

/// Overall request timeout applied when the builder does not set one.
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct WatchClient {
    http: Client,
    base_chart: Url,
    base_news: Url,
    base_telegram: Url,
    news_api_key: Option<String>,
}

impl Default for WatchClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl WatchClient {
    /// Create a new builder.
    pub fn builder() -> WatchClientBuilder {
        WatchClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base_chart(&self) -> &Url {
        &self.base_chart
    }
    pub(crate) fn base_news(&self) -> &Url {
        &self.base_news
    }
    pub(crate) fn base_telegram(&self) -> &Url {
        &self.base_telegram
    }
    pub(crate) fn news_api_key(&self) -> Option<&str> {
        self.news_api_key.as_deref()
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct WatchClientBuilder {
    user_agent: Option<String>,
    base_chart: Option<Url>,
    base_news: Option<Url>,
    base_telegram: Option<Url>,
    news_api_key: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl WatchClientBuilder {
    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the chart API base (e.g., `https://query1.finance.yahoo.com/v8/finance/chart/`).
    #[must_use]
    pub fn base_chart(mut self, url: Url) -> Self {
        self.base_chart = Some(url);
        self
    }

    /// Override the news API base (e.g., `https://gnews.io/api/v4/`).
    #[must_use]
    pub fn base_news(mut self, url: Url) -> Self {
        self.base_news = Some(url);
        self
    }

    /// Override the Telegram Bot API base (e.g., `https://api.telegram.org/`).
    #[must_use]
    pub fn base_telegram(mut self, url: Url) -> Self {
        self.base_telegram = Some(url);
        self
    }

    /// API key sent as the `token` query parameter on news requests.
    #[must_use]
    pub fn news_api_key(mut self, key: impl Into<String>) -> Self {
        self.news_api_key = Some(key.into());
        self
    }

    /// Set a global request timeout (overall). Default: 10 seconds.
    #[must_use]
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns a `WatchError` if a default base URL fails to parse or the
    /// underlying HTTP client cannot be constructed.
    pub fn build(self) -> Result<WatchClient, WatchError> {
        let base_chart = self.base_chart.unwrap_or(Url::parse(DEFAULT_BASE_CHART)?);
        let base_news = self.base_news.unwrap_or(Url::parse(DEFAULT_BASE_NEWS)?);
        let base_telegram = self
            .base_telegram
            .unwrap_or(Url::parse(DEFAULT_BASE_TELEGRAM)?);

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT));

        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(WatchClient {
            http,
            base_chart,
            base_news,
            base_telegram,
            news_api_key: self.news_api_key,
        })
    }
}
