use serde::Deserialize;

use crate::core::error::WatchError;
use crate::history::model::Candle;

#[derive(Deserialize)]
pub(crate) struct ChartEnvelope {
    pub(crate) chart: Option<ChartNode>,
}

#[derive(Deserialize)]
pub(crate) struct ChartNode {
    pub(crate) result: Option<Vec<ChartResult>>,
    pub(crate) error: Option<ChartError>,
}

#[derive(Deserialize)]
pub(crate) struct ChartError {
    pub(crate) code: String,
    pub(crate) description: String,
}

#[derive(Deserialize)]
pub(crate) struct ChartResult {
    #[serde(default)]
    pub(crate) timestamp: Option<Vec<i64>>,
    pub(crate) indicators: Indicators,
}

#[derive(Deserialize)]
pub(crate) struct Indicators {
    #[serde(default)]
    pub(crate) quote: Vec<QuoteBlock>,
}

#[derive(Deserialize)]
pub(crate) struct QuoteBlock {
    #[serde(default)]
    pub(crate) open: Vec<Option<f64>>,
    #[serde(default)]
    pub(crate) high: Vec<Option<f64>>,
    #[serde(default)]
    pub(crate) low: Vec<Option<f64>>,
    #[serde(default)]
    pub(crate) close: Vec<Option<f64>>,
    #[serde(default)]
    pub(crate) volume: Vec<Option<u64>>,
}

/// Decode a chart v8 body into candles.
///
/// Rows with any missing OHLC value are dropped; a present result node with
/// no timestamps decodes to an empty series.
pub(crate) fn parse_chart(body: &str) -> Result<Vec<Candle>, WatchError> {
    let parsed: ChartEnvelope = serde_json::from_str(body)?;

    let chart = parsed
        .chart
        .ok_or_else(|| WatchError::Data("missing chart".into()))?;

    if let Some(err) = chart.error {
        return Err(WatchError::Data(format!(
            "yahoo error: {} - {}",
            err.code, err.description
        )));
    }

    let result = chart
        .result
        .ok_or_else(|| WatchError::Data("missing result".into()))?;
    let r0 = result
        .first()
        .ok_or_else(|| WatchError::Data("empty result".into()))?;

    let ts = r0.timestamp.as_deref().unwrap_or(&[]);
    if ts.is_empty() {
        return Ok(Vec::new());
    }

    let q = r0
        .indicators
        .quote
        .first()
        .ok_or_else(|| WatchError::Data("missing quote".into()))?;

    let mut out = Vec::with_capacity(ts.len());
    for (i, &t) in ts.iter().enumerate() {
        let getter = |v: &Vec<Option<f64>>| v.get(i).and_then(|x| *x);
        let open = getter(&q.open);
        let high = getter(&q.high);
        let low = getter(&q.low);
        let close = getter(&q.close);
        let volume = q.volume.get(i).and_then(|x| *x);

        if let (Some(open), Some(high), Some(low), Some(close)) = (open, high, low, close) {
            out.push(Candle {
                ts: t,
                open,
                high,
                low,
                close,
                volume,
            });
        }
    }

    Ok(out)
}
