//! Latest-headline search via the GNews API.

mod api;
mod model;
mod wire;

pub use model::Article;

use crate::core::{WatchClient, WatchError};

/// A builder for searching news articles matching a query.
pub struct NewsBuilder {
    client: WatchClient,
    query: String,
    country: Option<String>,
    lang: Option<String>,
    max_results: u32,
}

impl NewsBuilder {
    /// Creates a new `NewsBuilder` for a given search query.
    pub fn new(client: &WatchClient, query: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            query: query.into(),
            country: None,
            lang: None,
            max_results: 10,
        }
    }

    /// Restrict results to one country (two-letter code, e.g. `"in"`).
    #[must_use]
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Restrict results to one language (two-letter code, e.g. `"en"`).
    #[must_use]
    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    /// Sets the maximum number of articles to return.
    #[must_use]
    pub const fn max_results(mut self, n: u32) -> Self {
        self.max_results = n;
        self
    }

    /// Executes the request and fetches the matching articles.
    ///
    /// # Errors
    ///
    /// Returns a `WatchError` if the request fails, the server answers with a
    /// non-2xx status, or the body cannot be decoded.
    pub async fn fetch(self) -> Result<Vec<Article>, WatchError> {
        api::fetch_articles(
            &self.client,
            &self.query,
            self.country.as_deref(),
            self.lang.as_deref(),
            self.max_results,
        )
        .await
    }
}
