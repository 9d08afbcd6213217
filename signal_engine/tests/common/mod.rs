//! Shared builders for synthetic bar series.

use chrono::{Duration, TimeZone, Utc};
use signal_engine::models::{
    bar::Bar,
    series::BarSeries,
    timeframe::TimeFrame,
};

/// Daily bars with the given closes; open/high/low are derived tight bands
/// so every bar satisfies the series invariants.
pub fn series_from_closes(symbol: &str, closes: &[f64]) -> BarSeries {
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
            volume: 1_000.0 + (i % 5) as f64 * 50.0,
        })
        .collect();
    BarSeries {
        symbol: symbol.into(),
        timeframe: TimeFrame::daily(),
        bars,
    }
}

/// Closes rising linearly from 100 to 139.
pub fn linear_rise_40() -> BarSeries {
    let closes: Vec<f64> = (0..40).map(|i| 100.0 + i as f64).collect();
    series_from_closes("RISE", &closes)
}

/// A smooth parabolic decline into a trough at bar 40, then a recovery.
/// The curvature keeps the MACD line well separated from its signal line,
/// so the recovery produces exactly one golden cross.
pub fn parabolic_v_80() -> BarSeries {
    let closes: Vec<f64> = (0..80)
        .map(|i| 110.0 + (i as f64 - 40.0).powi(2) / 20.0)
        .collect();
    series_from_closes("VSHAPE", &closes)
}
