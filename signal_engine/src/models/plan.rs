use chrono::{DateTime, Utc};
use serde::Serialize;

/// Risk parameters for acting on a buy signal.
///
/// `risk_reward_ratio` is `0.0` for degenerate geometry (stop at or above
/// entry); downstream threshold checks then reject the trade without any
/// special casing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TradePlan {
    /// Index of the triggering buy bar.
    pub index: usize,
    /// Timestamp of the triggering buy bar.
    pub timestamp: DateTime<Utc>,
    /// Entry price (close of the triggering bar).
    pub entry: f64,
    /// Stop placed below rolling support, buffered against noise.
    pub stop_loss: f64,
    /// Profit target at the rolling resistance.
    pub take_profit: f64,
    /// `(take_profit − entry) / (entry − stop_loss)`, or `0.0` when risk
    /// is not positive.
    pub risk_reward_ratio: f64,
    /// Whether the ratio clears the configured minimum. Informational only.
    pub meets_min_rr: bool,
}
