//! Pure indicator computation over a validated bar series.
//!
//! Every function here is causal: the value at index `t` depends only on bars
//! up to and including `t`. Warm-up rows carry `None` instead of NaN so that
//! nothing downstream can compare against an undefined value.
//!
//! [`compute`] is the single pass that assembles an [`IndicatorFrame`]; the
//! individual series functions are exposed for reuse and direct testing.

pub mod candle;
pub mod ema;
pub mod macd;
pub mod rolling;
pub mod rsi;

pub use ema::ema;
pub use macd::{MacdOutput, macd};
pub use rolling::{rolling_max, rolling_mean, rolling_min};
pub use rsi::rsi;

use crate::{
    config::EngineConfig,
    models::{
        frame::{IndicatorFrame, IndicatorRow},
        series::BarSeries,
    },
};

/// Computes every indicator column and zips them into a frame aligned 1:1
/// with the input bars.
///
/// Expects a validated series; the caller ([`crate::evaluate::evaluate`])
/// enforces the config and minimum-length preconditions first.
pub fn compute(series: &BarSeries, config: &EngineConfig) -> IndicatorFrame {
    let closes: Vec<f64> = series.bars.iter().map(|b| b.close).collect();
    let lows: Vec<f64> = series.bars.iter().map(|b| b.low).collect();
    let highs: Vec<f64> = series.bars.iter().map(|b| b.high).collect();
    let volumes: Vec<f64> = series.bars.iter().map(|b| b.volume).collect();

    let macd_out = macd(
        &closes,
        config.fast_period,
        config.slow_period,
        config.signal_period,
    );
    let rsi_col = rsi(&closes, config.rsi_period);
    let support = rolling_min(&lows, config.sr_window);
    let resistance = rolling_max(&highs, config.sr_window);
    let volume_sma = rolling_mean(&volumes, config.volume_window);
    let (bullish_engulfing, bearish_engulfing) = candle::engulfing_flags(&series.bars);

    let rows = series
        .bars
        .iter()
        .enumerate()
        .map(|(t, bar)| IndicatorRow {
            macd_line: macd_out.line[t],
            macd_signal: macd_out.signal[t],
            macd_hist: macd_out.hist[t],
            rsi: rsi_col[t],
            support: support[t],
            resistance: resistance[t],
            volume_sma: volume_sma[t],
            body: bar.body(),
            upper_wick: bar.upper_wick(),
            is_rejection: candle::is_rejection(
                bar,
                resistance[t],
                config.rejection_multiplier,
                config.proximity_factor,
            ),
            bullish_engulfing: bullish_engulfing[t],
            bearish_engulfing: bearish_engulfing[t],
        })
        .collect();

    IndicatorFrame {
        symbol: series.symbol.clone(),
        timeframe: series.timeframe,
        bars: series.bars.clone(),
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{bar::Bar, timeframe::TimeFrame};
    use chrono::{Duration, TimeZone, Utc};

    fn series_from_closes(closes: &[f64]) -> BarSeries {
        let t0 = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let bars = closes
            .iter()
            .enumerate()
            .map(|(i, &close)| Bar {
                timestamp: t0 + Duration::days(i as i64),
                open: close * 0.999,
                high: close * 1.002,
                low: close * 0.997,
                close,
                volume: 1_000.0,
            })
            .collect();
        BarSeries {
            symbol: "TEST".into(),
            timeframe: TimeFrame::daily(),
            bars,
        }
    }

    #[test]
    fn rows_align_with_bars() {
        let series = series_from_closes(&(0..40).map(|i| 100.0 + i as f64).collect::<Vec<_>>());
        let frame = compute(&series, &EngineConfig::default());
        assert_eq!(frame.len(), 40);
        assert_eq!(frame.bars, series.bars);
    }

    #[test]
    fn warmup_boundaries_per_column() {
        let series = series_from_closes(&(0..40).map(|i| 100.0 + i as f64).collect::<Vec<_>>());
        let frame = compute(&series, &EngineConfig::default());

        // slow_period 26 -> MACD line defined from index 25
        assert!(frame.rows[24].macd_line.is_none());
        assert!(frame.rows[25].macd_line.is_some());
        // signal defined from index 33
        assert!(frame.rows[32].macd_signal.is_none());
        assert!(frame.rows[33].macd_signal.is_some());
        // rsi_period 14 -> defined from index 14
        assert!(frame.rows[13].rsi.is_none());
        assert!(frame.rows[14].rsi.is_some());
        // sr_window / volume_window 20 -> defined from index 19
        assert!(frame.rows[18].support.is_none());
        assert!(frame.rows[19].support.is_some());
        assert!(frame.rows[18].resistance.is_none());
        assert!(frame.rows[19].volume_sma.is_some());
    }

    #[test]
    fn linear_rise_pegs_rsi_at_100() {
        let series = series_from_closes(&(0..40).map(|i| 100.0 + i as f64).collect::<Vec<_>>());
        let frame = compute(&series, &EngineConfig::default());
        for row in &frame.rows[14..] {
            assert_eq!(row.rsi, Some(100.0));
        }
    }

    #[test]
    fn causality_prefix_invariance() {
        let closes: Vec<f64> = (0..60)
            .map(|i| 100.0 + (i as f64 * 0.7).sin() * 10.0)
            .collect();
        let full = compute(&series_from_closes(&closes), &EngineConfig::default());
        let prefix = compute(&series_from_closes(&closes[..45]), &EngineConfig::default());
        assert_eq!(&full.rows[..45], &prefix.rows[..]);
    }
}
