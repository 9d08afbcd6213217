//! Candle-shape metrics and two-candle reversal patterns.

use crate::models::bar::Bar;

/// A long upper wick printed into resistance: the wick dwarfs the body and
/// the high reached at least `resistance × proximity_factor`.
///
/// Always false while the resistance level is still warming up.
pub fn is_rejection(
    bar: &Bar,
    resistance: Option<f64>,
    rejection_multiplier: f64,
    proximity_factor: f64,
) -> bool {
    let Some(resistance) = resistance else {
        return false;
    };
    bar.upper_wick() > bar.body() * rejection_multiplier
        && bar.high >= resistance * proximity_factor
}

/// Per-bar bullish/bearish engulfing flags for the whole series.
///
/// Bullish at `t`: bar `t-1` closed down, bar `t` closed up, and the current
/// real body contains the prior one (`open[t] <= close[t-1]` and
/// `close[t] >= open[t-1]`). Bearish mirrors it. The first bar has no prior
/// candle and is always false.
pub fn engulfing_flags(bars: &[Bar]) -> (Vec<bool>, Vec<bool>) {
    let mut bullish = vec![false; bars.len()];
    let mut bearish = vec![false; bars.len()];
    for t in 1..bars.len() {
        let prev = &bars[t - 1];
        let cur = &bars[t];
        bullish[t] = prev.is_bearish()
            && cur.is_bullish()
            && cur.open <= prev.close
            && cur.close >= prev.open;
        bearish[t] = prev.is_bullish()
            && cur.is_bearish()
            && cur.open >= prev.close
            && cur.close <= prev.open;
    }
    (bullish, bearish)
}
