//! Categorical read of the latest bar's state.
//!
//! A presentation-layer lookup over already-computed values; no new math
//! happens here. Thresholds are the same configuration the detector uses.

use indexmap::IndexMap;
use serde::Serialize;

use crate::{config::EngineConfig, models::frame::IndicatorFrame};

/// Human-readable labels for the most recent bar, keyed by category in a
/// stable order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Advisory {
    /// Symbol the advisory describes.
    pub symbol: String,
    /// category -> label, in insertion order.
    pub notes: IndexMap<String, String>,
}

/// Maps the latest row to categorical labels. `None` for an empty frame.
pub fn advise(frame: &IndicatorFrame, config: &EngineConfig) -> Option<Advisory> {
    let (bar, row) = frame.latest()?;
    let mut notes = IndexMap::new();

    let momentum = match (row.macd_line, row.rsi) {
        (Some(line), Some(rsi)) if line > 0.0 && rsi > 50.0 => "bullish continuation",
        (Some(line), _) if line > 0.0 => "bullish momentum",
        (Some(line), Some(rsi)) if line < 0.0 && rsi < 50.0 => "bearish continuation",
        (Some(line), _) if line < 0.0 => "bearish momentum",
        (Some(_), _) => "flat momentum",
        (None, _) => "warming up",
    };
    notes.insert("momentum".into(), momentum.into());

    if let Some(rsi) = row.rsi {
        let zone = if rsi > config.rsi_sell_threshold {
            "overbought"
        } else if rsi < config.rsi_buy_threshold {
            "oversold"
        } else {
            "neutral"
        };
        notes.insert("rsi".into(), zone.into());
    }

    if let (Some(support), Some(resistance)) = (row.support, row.resistance) {
        let structure = if bar.high >= resistance * (1.0 - config.near_pct) {
            "near resistance"
        } else if bar.low <= support * (1.0 + config.near_pct) {
            "near support"
        } else {
            "mid-range"
        };
        notes.insert("price_structure".into(), structure.into());
    }

    if let Some(baseline) = row.volume_sma {
        let volume = if bar.volume >= baseline {
            "above baseline"
        } else {
            "below baseline"
        };
        notes.insert("volume".into(), volume.into());
    }

    let mut patterns = Vec::new();
    if row.is_rejection {
        patterns.push("rejection at resistance");
    }
    if row.bullish_engulfing {
        patterns.push("bullish engulfing");
    }
    if row.bearish_engulfing {
        patterns.push("bearish engulfing");
    }
    if !patterns.is_empty() {
        notes.insert("pattern".into(), patterns.join(", "));
    }

    Some(Advisory {
        symbol: frame.symbol.clone(),
        notes,
    })
}
