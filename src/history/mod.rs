//! OHLCV history via the Yahoo chart v8 endpoint.

mod model;
mod wire;

pub use model::Candle;

use crate::core::{WatchClient, WatchError, net};

/// Relative time window of a history request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Range {
    D1,
    D5,
    M1,
    M3,
    M6,
    Y1,
}

impl Range {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Range::D1 => "1d",
            Range::D5 => "5d",
            Range::M1 => "1mo",
            Range::M3 => "3mo",
            Range::M6 => "6mo",
            Range::Y1 => "1y",
        }
    }
}

/// Bar granularity of a history request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interval {
    I1m,
    I5m,
    I15m,
    I30m,
    I1h,
    D1,
}

impl Interval {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Interval::I1m => "1m",
            Interval::I5m => "5m",
            Interval::I15m => "15m",
            Interval::I30m => "30m",
            Interval::I1h => "1h",
            Interval::D1 => "1d",
        }
    }
}

/// A builder for fetching historical candles for one symbol.
pub struct HistoryBuilder<'a> {
    client: &'a WatchClient,
    symbol: String,
    range: Range,
    interval: Interval,
    include_prepost: bool,
}

impl<'a> HistoryBuilder<'a> {
    /// Creates a new `HistoryBuilder` for a given symbol.
    ///
    /// Defaults to one month of daily bars, regular session only.
    pub fn new(client: &'a WatchClient, symbol: impl Into<String>) -> Self {
        Self {
            client,
            symbol: symbol.into(),
            range: Range::M1,
            interval: Interval::D1,
            include_prepost: false,
        }
    }

    /// Sets the relative time window.
    #[must_use]
    pub const fn range(mut self, range: Range) -> Self {
        self.range = range;
        self
    }

    /// Sets the bar granularity.
    #[must_use]
    pub const fn interval(mut self, interval: Interval) -> Self {
        self.interval = interval;
        self
    }

    /// Include pre-market and post-market bars for intraday intervals.
    #[must_use]
    pub const fn prepost(mut self, yes: bool) -> Self {
        self.include_prepost = yes;
        self
    }

    /// Executes the request and fetches the candles.
    ///
    /// # Errors
    ///
    /// Returns a `WatchError` if the request fails, the server answers with a
    /// non-2xx status, or the body cannot be decoded.
    pub async fn fetch(self) -> Result<Vec<Candle>, WatchError> {
        let mut url = self.client.base_chart().join(&self.symbol)?;
        {
            let mut qp = url.query_pairs_mut();
            qp.append_pair("range", self.range.as_str());
            qp.append_pair("interval", self.interval.as_str());
            qp.append_pair(
                "includePrePost",
                if self.include_prepost { "true" } else { "false" },
            );
        }

        let resp = self.client.http().get(url).send().await?;
        let resp = net::ok(resp)?;
        let body = resp.text().await?;
        wire::parse_chart(&body)
    }
}
