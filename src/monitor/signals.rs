//! Pure signal math: snapshot derivation and threshold evaluation.

use std::fmt;

use crate::history::Candle;

/// Static alert thresholds, compiled-in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    /// Percent-change floor for a "down" alert (negative).
    pub pct_down: f64,
    /// Percent-change ceiling for an "up" alert (positive).
    pub pct_up: f64,
    /// Latest 5-minute volume vs. mean 5-minute volume.
    pub intraday_volume_multiplier: f64,
    /// Cumulative same-day volume vs. trailing average daily volume.
    pub daily_volume_multiplier: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            pct_down: -3.0,
            pct_up: 3.0,
            intraday_volume_multiplier: 3.0,
            daily_volume_multiplier: 1.5,
        }
    }
}

/// How many prior daily bars feed the average-daily-volume baseline.
const DAILY_VOLUME_WINDOW: usize = 10;

/// Per-check figures derived from the daily and intraday series.
///
/// Every field is individually optional; a signal only fires when all of its
/// inputs are present and non-zero.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PriceVolumeSnapshot {
    /// Second-to-last daily close (or the only close when one bar exists).
    pub prev_close: Option<f64>,
    /// Mean of the last ten daily volumes, excluding the most recent bar.
    pub avg_daily_volume: Option<f64>,
    /// Close of the latest intraday bar.
    pub current_price: Option<f64>,
    /// Volume of the latest intraday bar.
    pub latest_interval_volume: Option<u64>,
    /// Mean volume across today's intraday bars.
    pub avg_interval_volume: Option<f64>,
    /// Summed volume across today's intraday bars.
    pub cumulative_volume: Option<u64>,
}

impl PriceVolumeSnapshot {
    /// Derive a snapshot from a daily series and a same-day intraday series.
    #[must_use]
    pub fn from_series(daily: &[Candle], intraday: &[Candle]) -> Self {
        let prev_close = if daily.len() >= 2 {
            daily.get(daily.len() - 2).map(|c| c.close)
        } else {
            daily.last().map(|c| c.close)
        };

        // Baseline excludes the in-progress bar.
        let prior: Vec<u64> = daily[..daily.len().saturating_sub(1)]
            .iter()
            .filter_map(|c| c.volume)
            .collect();
        let tail = &prior[prior.len().saturating_sub(DAILY_VOLUME_WINDOW)..];
        let avg_daily_volume = (!tail.is_empty())
            .then(|| tail.iter().sum::<u64>() as f64 / tail.len() as f64);

        let last = intraday.last();
        let current_price = last.map(|c| c.close);
        let latest_interval_volume = last.and_then(|c| c.volume);

        let volumes: Vec<u64> = intraday.iter().filter_map(|c| c.volume).collect();
        let avg_interval_volume = (!volumes.is_empty())
            .then(|| volumes.iter().sum::<u64>() as f64 / volumes.len() as f64);
        let cumulative_volume = (!volumes.is_empty()).then(|| volumes.iter().sum::<u64>());

        Self {
            prev_close,
            avg_daily_volume,
            current_price,
            latest_interval_volume,
            avg_interval_volume,
            cumulative_volume,
        }
    }
}

/// One threshold crossing, ready to format into a notification.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    PriceDrop {
        symbol: String,
        pct: f64,
        price: f64,
    },
    PriceJump {
        symbol: String,
        pct: f64,
        price: f64,
    },
    IntradayVolumeSpike {
        symbol: String,
        latest: u64,
        average: u64,
    },
    DailyVolumeSurge {
        symbol: String,
        cumulative: u64,
        average: u64,
        multiplier: f64,
    },
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alert::PriceDrop { symbol, pct, price } => {
                write!(f, "⚠️ {symbol} down {pct:.2}% (₹{price:.2})")
            }
            Alert::PriceJump { symbol, pct, price } => {
                write!(f, "🚀 {symbol} up {pct:.2}% (₹{price:.2})")
            }
            Alert::IntradayVolumeSpike {
                symbol,
                latest,
                average,
            } => {
                write!(
                    f,
                    "📈 {symbol} sudden 5-min volume spike! latest={latest} avg5min={average}"
                )
            }
            Alert::DailyVolumeSurge {
                symbol,
                cumulative,
                average,
                multiplier,
            } => {
                write!(
                    f,
                    "📊 {symbol} daily volume {cumulative} > {multiplier}× avg daily ({average})"
                )
            }
        }
    }
}

/// Evaluate the three independent signals against `thresholds`.
///
/// Each signal contributes at most one alert per call; the two percent-change
/// directions are mutually exclusive by sign.
#[must_use]
pub fn evaluate(symbol: &str, snap: &PriceVolumeSnapshot, thresholds: &Thresholds) -> Vec<Alert> {
    let mut alerts = Vec::new();

    if let (Some(prev), Some(price)) = (snap.prev_close, snap.current_price)
        && prev != 0.0
        && price != 0.0
    {
        let pct = (price - prev) / prev * 100.0;
        if pct <= thresholds.pct_down {
            alerts.push(Alert::PriceDrop {
                symbol: symbol.to_owned(),
                pct,
                price,
            });
        } else if pct >= thresholds.pct_up {
            alerts.push(Alert::PriceJump {
                symbol: symbol.to_owned(),
                pct,
                price,
            });
        }
    }

    if let (Some(latest), Some(avg)) = (snap.latest_interval_volume, snap.avg_interval_volume)
        && latest > 0
        && avg > 0.0
        && latest as f64 >= thresholds.intraday_volume_multiplier * avg
    {
        alerts.push(Alert::IntradayVolumeSpike {
            symbol: symbol.to_owned(),
            latest,
            average: avg as u64,
        });
    }

    if let (Some(cumulative), Some(avg)) = (snap.cumulative_volume, snap.avg_daily_volume)
        && cumulative > 0
        && avg > 0.0
        && cumulative as f64 >= thresholds.daily_volume_multiplier * avg
    {
        alerts.push(Alert::DailyVolumeSurge {
            symbol: symbol.to_owned(),
            cumulative,
            average: avg as u64,
            multiplier: thresholds.daily_volume_multiplier,
        });
    }

    alerts
}
