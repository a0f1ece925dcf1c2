//! Candle — the fundamental market data unit.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// OHLC candle for a single instrument at a single open time.
///
/// The renderer only reads `open_time`, `high`, and `low`; `open` and `close`
/// are carried so a full bar from any feed can be ingested unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub open_time: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl Candle {
    /// Basic OHLC sanity check: high bounds open/close from above, low from below.
    ///
    /// Advisory only. The renderer never calls this — an inverted candle
    /// (high < low) propagates into the level geometry as-is.
    pub fn is_sane(&self) -> bool {
        self.high >= self.low
            && self.high >= self.open
            && self.high >= self.close
            && self.low <= self.open
            && self.low <= self.close
    }

    /// High-to-low span. Negative when the candle is inverted.
    pub fn range(&self) -> f64 {
        self.high - self.low
    }
}

/// Append-only, index-addressable candle series.
///
/// Stands in for the host platform's bar collection. The renderer reads the
/// target candle's `high`/`low`/`open_time` and the `open_time` of the candle
/// after it (the line's end anchor).
#[derive(Debug, Clone, Default)]
pub struct CandleSeries {
    candles: Vec<Candle>,
}

impl CandleSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_candles(candles: Vec<Candle>) -> Self {
        Self { candles }
    }

    pub fn push(&mut self, candle: Candle) {
        self.candles.push(candle);
    }

    pub fn get(&self, index: usize) -> Option<&Candle> {
        self.candles.get(index)
    }

    pub fn len(&self) -> usize {
        self.candles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    /// Index of the most recent candle, `None` for an empty series.
    pub fn last_index(&self) -> Option<usize> {
        self.candles.len().checked_sub(1)
    }
}
