//! The polling loop: per-symbol price/volume and news checks on a fixed tick.

mod signals;
mod state;

pub use signals::{Alert, PriceVolumeSnapshot, Thresholds, evaluate};
pub use state::NewsState;

use std::time::Duration;

use tokio::{
    select,
    sync::oneshot,
    task::JoinHandle,
    time::{MissedTickBehavior, interval},
};

use crate::{
    core::{WatchClient, WatchError},
    history::{HistoryBuilder, Interval, Range},
    market,
    news::NewsBuilder,
    telegram::Notifier,
};

/// Default watchlist, in check order.
pub const DEFAULT_WATCHLIST: [&str; 5] = ["RELIANCE", "TCS", "HDFCBANK", "INFY", "ICICIBANK"];

/// Default pause between cycles.
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(300);

/// Static monitor configuration: watchlist, cadence and thresholds.
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// Symbols checked each cycle, in order.
    pub watchlist: Vec<String>,
    /// Pause between cycles.
    pub poll_interval: Duration,
    pub thresholds: Thresholds,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            watchlist: DEFAULT_WATCHLIST.iter().map(|s| (*s).to_owned()).collect(),
            poll_interval: DEFAULT_POLL_INTERVAL,
            thresholds: Thresholds::default(),
        }
    }
}

/// Owns one pass over the watchlist: price/volume checks while the market is
/// open, news checks always.
pub struct Monitor {
    client: WatchClient,
    notifier: Notifier,
    config: MonitorConfig,
    news_state: NewsState,
}

impl Monitor {
    pub fn new(client: WatchClient, notifier: Notifier, config: MonitorConfig) -> Self {
        Self {
            client,
            notifier,
            config,
            news_state: NewsState::new(),
        }
    }

    /// One-time startup notification listing the watchlist.
    pub async fn announce_start(&self) {
        let msg = format!(
            "🔔 Stock alert bot started. Watching: {}",
            self.config.watchlist.join(", ")
        );
        self.notifier.send_or_log(&msg).await;
    }

    /// One full cycle: price/volume checks when the market is open, then news
    /// checks unconditionally, all in watchlist order.
    pub async fn run_cycle(&mut self) {
        if market::is_open(market::now_ist()) {
            self.price_volume_sweep().await;
        } else {
            tracing::debug!("market closed, skipping price/volume checks");
        }
        self.news_sweep().await;
    }

    /// Price/volume check for every watchlist symbol. A failed symbol is
    /// logged and the sweep moves on.
    pub async fn price_volume_sweep(&self) {
        for symbol in &self.config.watchlist {
            if let Err(e) = self.check_symbol(symbol).await {
                tracing::warn!(symbol = %symbol, error = %e, "price/volume check failed");
            }
        }
    }

    /// News check for every watchlist symbol, isolated per symbol.
    pub async fn news_sweep(&mut self) {
        let symbols = self.config.watchlist.clone();
        for symbol in &symbols {
            if let Err(e) = self.check_news(symbol).await {
                tracing::warn!(symbol = %symbol, error = %e, "news check failed");
            }
        }
    }

    /// Fetch both candle series for one symbol, evaluate the signals and
    /// notify on each crossing.
    ///
    /// An empty daily series skips the symbol entirely; an empty intraday
    /// series leaves no signal with enough inputs to fire.
    ///
    /// # Errors
    ///
    /// Returns a `WatchError` when either fetch or decode fails.
    pub async fn check_symbol(&self, symbol: &str) -> Result<(), WatchError> {
        let ticker = nse_symbol(symbol);

        let daily = HistoryBuilder::new(&self.client, &ticker)
            .range(Range::M1)
            .interval(Interval::D1)
            .fetch()
            .await?;
        if daily.is_empty() {
            tracing::debug!(symbol = %symbol, "no daily bars, skipping");
            return Ok(());
        }

        let intraday = HistoryBuilder::new(&self.client, &ticker)
            .range(Range::D1)
            .interval(Interval::I5m)
            .fetch()
            .await?;

        let snapshot = PriceVolumeSnapshot::from_series(&daily, &intraday);
        for alert in evaluate(symbol, &snapshot, &self.config.thresholds) {
            self.notifier.send_or_log(&alert.to_string()).await;
        }
        Ok(())
    }

    /// Fetch the latest matching headline for one symbol and notify when it
    /// differs from the last one seen.
    ///
    /// # Errors
    ///
    /// Returns a `WatchError` when the fetch or decode fails.
    pub async fn check_news(&mut self, symbol: &str) -> Result<(), WatchError> {
        let articles = NewsBuilder::new(&self.client, symbol)
            .country("in")
            .lang("en")
            .max_results(1)
            .fetch()
            .await?;

        let Some(article) = articles.into_iter().next() else {
            return Ok(());
        };

        if self.news_state.observe(symbol, &article.title) {
            let mut msg = format!("📰 {symbol} (India News)\n{}", article.title);
            if let Some(link) = &article.link {
                msg.push('\n');
                msg.push_str(link);
            }
            self.notifier.send_or_log(&msg).await;
        }
        Ok(())
    }

    /// Read access to the dedup state (handy for inspection and tests).
    #[must_use]
    pub fn news_state(&self) -> &NewsState {
        &self.news_state
    }

    /// Start the loop on the runtime. Returns a handle to stop it.
    ///
    /// The first cycle runs immediately; ticks that overrun delay the next
    /// cycle rather than bursting to catch up.
    #[must_use]
    pub fn start(self) -> MonitorHandle {
        let (stop_tx, mut stop_rx) = oneshot::channel::<()>();
        let mut monitor = self;

        let join = tokio::spawn(async move {
            monitor.announce_start().await;

            let mut ticker = interval(monitor.config.poll_interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                select! {
                    _ = ticker.tick() => {
                        monitor.run_cycle().await;
                    }
                    _ = &mut stop_rx => {
                        break;
                    }
                }
            }
        });

        MonitorHandle {
            join,
            stop_tx: Some(stop_tx),
        }
    }
}

/// A handle for a running monitor task.
pub struct MonitorHandle {
    join: JoinHandle<()>,
    stop_tx: Option<oneshot::Sender<()>>,
}

impl MonitorHandle {
    /// Politely ask the loop to stop and wait for it to finish.
    pub async fn stop(mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
        let _ = self.join.await;
    }

    /// Immediately abort the background task.
    pub fn abort(self) {
        self.join.abort();
    }
}

/// Append the NSE suffix when the symbol does not already carry it.
fn nse_symbol(symbol: &str) -> String {
    if symbol.ends_with(".NS") {
        symbol.to_owned()
    } else {
        format!("{symbol}.NS")
    }
}
