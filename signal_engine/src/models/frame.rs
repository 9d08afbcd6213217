//! The indicator-augmented view of a bar series.
//!
//! An [`IndicatorFrame`] pairs the input bars with one [`IndicatorRow`] per
//! bar. Fields that need a warm-up window are `Option<f64>` and stay `None`
//! until enough history exists; comparisons against an undefined value are
//! impossible by construction, so warm-up bars can never fire a signal.

use serde::Serialize;

use crate::models::{bar::Bar, timeframe::TimeFrame};

/// Derived indicator values for one bar.
///
/// Every field is a pure function of the bars up to and including this row's
/// bar; nothing here looks ahead.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IndicatorRow {
    /// MACD line (fast EMA − slow EMA of close).
    pub macd_line: Option<f64>,
    /// Smoothed signal line over the MACD line.
    pub macd_signal: Option<f64>,
    /// `macd_line − macd_signal`.
    pub macd_hist: Option<f64>,
    /// Relative Strength Index in `[0, 100]`.
    pub rsi: Option<f64>,
    /// Rolling minimum of lows (support level).
    pub support: Option<f64>,
    /// Rolling maximum of highs (resistance level).
    pub resistance: Option<f64>,
    /// Rolling mean of volume (baseline).
    pub volume_sma: Option<f64>,
    /// Candle real-body size.
    pub body: f64,
    /// Candle upper-wick size.
    pub upper_wick: f64,
    /// Long upper wick printed near resistance.
    pub is_rejection: bool,
    /// Two-candle bullish engulfing at this bar.
    pub bullish_engulfing: bool,
    /// Two-candle bearish engulfing at this bar.
    pub bearish_engulfing: bool,
}

/// Bars plus their aligned indicator rows for one symbol.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorFrame {
    /// The symbol the frame was computed for.
    pub symbol: String,
    /// The interval of the underlying bars.
    pub timeframe: TimeFrame,
    /// The input bars, unchanged.
    pub bars: Vec<Bar>,
    /// One row per bar, same order.
    pub rows: Vec<IndicatorRow>,
}

impl IndicatorFrame {
    /// Number of bars (and rows) in the frame.
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// True when the frame holds no bars.
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// The most recent bar with its indicator row.
    pub fn latest(&self) -> Option<(&Bar, &IndicatorRow)> {
        Some((self.bars.last()?, self.rows.last()?))
    }
}
