/// One OHLCV bar at the requested interval.
#[derive(Debug, Clone, PartialEq)]
pub struct Candle {
    /// Unix seconds (UTC) of the bar open.
    pub ts: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    /// Yahoo omits volume for some rows.
    pub volume: Option<u64>,
}
