//! nsewatch: price, volume and news alerts for a fixed NSE watchlist.
//!
//! The crate polls the Yahoo Finance chart endpoint for daily and 5-minute
//! candles, the GNews search endpoint for headlines, and pushes
//! threshold-triggered alerts to a Telegram chat. The [`Monitor`] owns the
//! loop; everything below it is a small builder-style API over a shared
//! [`WatchClient`].

pub mod config;
pub mod core;
pub mod history;
pub mod market;
pub mod monitor;
pub mod news;
pub mod telegram;

pub use config::Settings;
pub use self::core::{WatchClient, WatchClientBuilder, WatchError};
pub use history::{Candle, HistoryBuilder, Interval, Range};
pub use monitor::{
    Alert, Monitor, MonitorConfig, MonitorHandle, NewsState, PriceVolumeSnapshot, Thresholds,
};
pub use news::{Article, NewsBuilder};
pub use telegram::Notifier;
