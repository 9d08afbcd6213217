//! Signal detection over an indicator frame.
//!
//! Two detectors are available, selected by [`SignalMode`]:
//!
//! - `crossover`: plain MACD golden/dead crosses.
//! - `confluence`: a cross is only accepted when price structure and an RSI
//!   reversal line up on the same bar. Any one condition alone is noisy;
//!   demanding all three trades signal count for precision.
//!
//! A cross can only fire when both the line and the signal are defined on the
//! current and the prior bar, so nothing fires out of the warm-up window. The
//! prior-bar comparison is non-strict (`<=` for buys), which makes exactly
//! one buy fire per maximal line-above-signal run, at the run's first bar.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    config::EngineConfig,
    models::{
        frame::{IndicatorFrame, IndicatorRow},
        signal::{SignalEvent, SignalKind},
    },
};

/// Which detector produced a signal series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalMode {
    /// MACD golden/dead crosses only.
    #[default]
    Crossover,
    /// Crosses gated by support/resistance proximity and an RSI reversal.
    Confluence,
}

impl FromStr for SignalMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "crossover" => Ok(Self::Crossover),
            "confluence" => Ok(Self::Confluence),
            other => Err(format!("unknown signal mode: {other}")),
        }
    }
}

/// Per-bar buy/sell flags, aligned 1:1 with the frame that produced them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignalSeries {
    /// The detector that ran.
    pub mode: SignalMode,
    /// True where a buy fired.
    pub buy: Vec<bool>,
    /// True where a sell fired.
    pub sell: Vec<bool>,
}

impl SignalSeries {
    /// The discrete events, in timestamp order. A bar can in principle flag
    /// both directions; the buy is listed first.
    pub fn events(&self, frame: &IndicatorFrame) -> Vec<SignalEvent> {
        let mut events = Vec::new();
        for (index, bar) in frame.bars.iter().enumerate() {
            if self.buy[index] {
                events.push(SignalEvent {
                    index,
                    timestamp: bar.timestamp,
                    kind: SignalKind::Buy,
                });
            }
            if self.sell[index] {
                events.push(SignalEvent {
                    index,
                    timestamp: bar.timestamp,
                    kind: SignalKind::Sell,
                });
            }
        }
        events
    }
}

/// Runs the configured detector over the frame.
pub fn detect(frame: &IndicatorFrame, config: &EngineConfig) -> SignalSeries {
    let n = frame.len();
    let mut buy = vec![false; n];
    let mut sell = vec![false; n];

    for t in 1..n {
        let cross_up = golden_cross(&frame.rows, t);
        let cross_down = dead_cross(&frame.rows, t);
        match config.mode {
            SignalMode::Crossover => {
                buy[t] = cross_up;
                sell[t] = cross_down;
            }
            SignalMode::Confluence => {
                buy[t] = cross_up
                    && near_support(frame, t, config.near_pct)
                    && rsi_rising_from_oversold(&frame.rows, t, config.rsi_buy_threshold);
                sell[t] = cross_down
                    && near_resistance(frame, t, config.near_pct)
                    && rsi_falling_from_overbought(&frame.rows, t, config.rsi_sell_threshold);
            }
        }
    }

    SignalSeries {
        mode: config.mode,
        buy,
        sell,
    }
}

/// MACD line crossed above its signal line at `t`. Equality on the prior bar
/// still counts as "was not yet above", so a run that touches the line fires
/// exactly once.
fn golden_cross(rows: &[IndicatorRow], t: usize) -> bool {
    match macd_pair(rows, t) {
        Some((line, signal, prev_line, prev_signal)) => line > signal && prev_line <= prev_signal,
        None => false,
    }
}

/// Mirror of [`golden_cross`].
fn dead_cross(rows: &[IndicatorRow], t: usize) -> bool {
    match macd_pair(rows, t) {
        Some((line, signal, prev_line, prev_signal)) => line < signal && prev_line >= prev_signal,
        None => false,
    }
}

fn macd_pair(rows: &[IndicatorRow], t: usize) -> Option<(f64, f64, f64, f64)> {
    Some((
        rows[t].macd_line?,
        rows[t].macd_signal?,
        rows[t - 1].macd_line?,
        rows[t - 1].macd_signal?,
    ))
}

fn near_support(frame: &IndicatorFrame, t: usize, near_pct: f64) -> bool {
    match frame.rows[t].support {
        Some(support) => frame.bars[t].low <= support * (1.0 + near_pct),
        None => false,
    }
}

fn near_resistance(frame: &IndicatorFrame, t: usize, near_pct: f64) -> bool {
    match frame.rows[t].resistance {
        Some(resistance) => frame.bars[t].high >= resistance * (1.0 - near_pct),
        None => false,
    }
}

/// Strictly rising out of an oversold reading, not merely low.
fn rsi_rising_from_oversold(rows: &[IndicatorRow], t: usize, threshold: f64) -> bool {
    match (rows[t].rsi, rows[t - 1].rsi) {
        (Some(rsi), Some(prev)) => rsi < threshold && rsi > prev,
        _ => false,
    }
}

fn rsi_falling_from_overbought(rows: &[IndicatorRow], t: usize, threshold: f64) -> bool {
    match (rows[t].rsi, rows[t - 1].rsi) {
        (Some(rsi), Some(prev)) => rsi > threshold && rsi < prev,
        _ => false,
    }
}
