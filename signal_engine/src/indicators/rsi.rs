/// Relative Strength Index over close-to-close deltas, Wilder smoothing.
///
/// The first value (at index `period`) uses the simple mean of the first
/// `period` gains and losses; later values use
/// `avg = (prev * (period - 1) + current) / period`. When the average loss is
/// zero the RSI is exactly 100, so an all-gains window never divides by zero.
pub fn rsi(closes: &[f64], period: usize) -> Vec<Option<f64>> {
    debug_assert!(period > 0);
    let n = closes.len();
    let mut out = vec![None; n];
    if n < period + 1 {
        return out;
    }

    let gain = |i: usize| (closes[i] - closes[i - 1]).max(0.0);
    let loss = |i: usize| (closes[i - 1] - closes[i]).max(0.0);

    let mut avg_gain = (1..=period).map(gain).sum::<f64>() / period as f64;
    let mut avg_loss = (1..=period).map(loss).sum::<f64>() / period as f64;
    out[period] = Some(rsi_value(avg_gain, avg_loss));

    for i in period + 1..n {
        avg_gain = (avg_gain * (period as f64 - 1.0) + gain(i)) / period as f64;
        avg_loss = (avg_loss * (period as f64 - 1.0) + loss(i)) / period as f64;
        out[i] = Some(rsi_value(avg_gain, avg_loss));
    }
    out
}

fn rsi_value(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        return 100.0;
    }
    100.0 - 100.0 / (1.0 + avg_gain / avg_loss)
}
