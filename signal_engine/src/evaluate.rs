//! The single evaluation pass: series + config in, signals and plan out.

use serde::Serialize;
use tracing::debug;

use crate::{
    config::EngineConfig,
    errors::Error,
    indicators,
    models::{frame::IndicatorFrame, plan::TradePlan, series::BarSeries, signal::SignalEvent},
    risk, signals,
    signals::SignalSeries,
};

/// Everything one evaluation produces. Owned by the caller; nothing is
/// cached or shared across runs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    /// The indicator-augmented series.
    pub frame: IndicatorFrame,
    /// Per-bar buy/sell flags from the configured detector.
    pub signals: SignalSeries,
    /// Discrete events, in timestamp order.
    pub events: Vec<SignalEvent>,
    /// Plan for the most recent qualifying buy event, if any.
    pub plan: Option<TradePlan>,
}

/// Evaluates one bar series under one configuration.
///
/// Deterministic and side-effect free: identical inputs produce bit-identical
/// output. Fails eagerly, before any computation, on an invalid config, a
/// malformed series, or a series shorter than the largest warm-up window.
pub fn evaluate(series: &BarSeries, config: &EngineConfig) -> Result<Evaluation, Error> {
    config.validate()?;
    series.validate()?;

    let required = config.min_required_bars();
    if series.len() < required {
        return Err(Error::InsufficientData {
            required,
            actual: series.len(),
        });
    }

    let frame = indicators::compute(series, config);
    let signal_series = signals::detect(&frame, config);
    let events = signal_series.events(&frame);
    let plan = risk::latest_plan_opt(&frame, &events, config);

    debug!(
        symbol = %series.symbol,
        bars = series.len(),
        events = events.len(),
        has_plan = plan.is_some(),
        "evaluation complete"
    );

    Ok(Evaluation {
        frame,
        signals: signal_series,
        events,
        plan,
    })
}
