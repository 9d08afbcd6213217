//! A validated, time-ordered collection of bars for one symbol.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{bar::Bar, timeframe::TimeFrame};

/// A violation of the bar-series invariants.
#[derive(Debug, Error, PartialEq)]
pub enum SeriesError {
    /// A price or volume field is out of its valid range.
    #[error("bar {index}: {reason}")]
    InvalidBar { index: usize, reason: String },

    /// Timestamps must be strictly increasing.
    #[error("bar {index}: timestamp does not increase over the previous bar")]
    OutOfOrder { index: usize },
}

/// Represents a complete set of time-series data for a single symbol.
///
/// This struct groups a vector of [`Bar`]s with their corresponding symbol
/// and [`TimeFrame`], making the data set self-describing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarSeries {
    /// The symbol this data represents (e.g., "AAPL", "BTC-USD").
    pub symbol: String,
    /// The time interval for each bar in the series.
    pub timeframe: TimeFrame,
    /// The collection of OHLCV bars.
    pub bars: Vec<Bar>,
}

impl BarSeries {
    /// Number of bars in the series.
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// True when the series holds no bars.
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Checks the series invariants: positive prices, non-negative volume,
    /// `low <= min(open, close)`, `max(open, close) <= high`, and strictly
    /// increasing timestamps.
    ///
    /// The engine calls this eagerly so that every derived value downstream
    /// can assume a well-formed series.
    pub fn validate(&self) -> Result<(), SeriesError> {
        for (index, bar) in self.bars.iter().enumerate() {
            if !(bar.open > 0.0 && bar.high > 0.0 && bar.low > 0.0 && bar.close > 0.0) {
                return Err(SeriesError::InvalidBar {
                    index,
                    reason: "prices must be positive and finite".into(),
                });
            }
            if !bar.open.is_finite()
                || !bar.high.is_finite()
                || !bar.low.is_finite()
                || !bar.close.is_finite()
                || !bar.volume.is_finite()
            {
                return Err(SeriesError::InvalidBar {
                    index,
                    reason: "prices and volume must be finite".into(),
                });
            }
            if bar.volume < 0.0 {
                return Err(SeriesError::InvalidBar {
                    index,
                    reason: "volume must be non-negative".into(),
                });
            }
            if bar.low > bar.open.min(bar.close) || bar.high < bar.open.max(bar.close) {
                return Err(SeriesError::InvalidBar {
                    index,
                    reason: "low/high must bracket open and close".into(),
                });
            }
            if index > 0 && bar.timestamp <= self.bars[index - 1].timestamp {
                return Err(SeriesError::OutOfOrder { index });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn series(bars: Vec<Bar>) -> BarSeries {
        BarSeries {
            symbol: "TEST".into(),
            timeframe: TimeFrame::daily(),
            bars,
        }
    }

    fn bar(day: i64, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Bar {
        let t0 = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        Bar {
            timestamp: t0 + Duration::days(day),
            open,
            high,
            low,
            close,
            volume,
        }
    }

    #[test]
    fn valid_series_passes() {
        let s = series(vec![
            bar(0, 100.0, 102.0, 99.0, 101.0, 1_000.0),
            bar(1, 101.0, 103.0, 100.0, 102.0, 1_200.0),
        ]);
        assert_eq!(s.validate(), Ok(()));
    }

    #[test]
    fn negative_price_rejected() {
        let s = series(vec![bar(0, -1.0, 102.0, 99.0, 101.0, 1_000.0)]);
        assert!(matches!(
            s.validate(),
            Err(SeriesError::InvalidBar { index: 0, .. })
        ));
    }

    #[test]
    fn high_below_close_rejected() {
        let s = series(vec![bar(0, 100.0, 100.5, 99.0, 101.0, 1_000.0)]);
        assert!(matches!(
            s.validate(),
            Err(SeriesError::InvalidBar { index: 0, .. })
        ));
    }

    #[test]
    fn duplicate_timestamp_rejected() {
        let s = series(vec![
            bar(0, 100.0, 102.0, 99.0, 101.0, 1_000.0),
            bar(0, 101.0, 103.0, 100.0, 102.0, 1_200.0),
        ]);
        assert_eq!(s.validate(), Err(SeriesError::OutOfOrder { index: 1 }));
    }

    #[test]
    fn negative_volume_rejected() {
        let s = series(vec![bar(0, 100.0, 102.0, 99.0, 101.0, -5.0)]);
        assert!(matches!(
            s.validate(),
            Err(SeriesError::InvalidBar { index: 0, .. })
        ));
    }
}
