use chrono::{DateTime, Utc};
use serde::Serialize;

/// Direction of a discrete trading signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalKind {
    Buy,
    Sell,
}

/// A discrete signal fired by one bar of the series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignalEvent {
    /// Index of the triggering bar within the evaluated series.
    pub index: usize,
    /// Timestamp of the triggering bar.
    pub timestamp: DateTime<Utc>,
    /// Buy or sell.
    pub kind: SignalKind,
}
