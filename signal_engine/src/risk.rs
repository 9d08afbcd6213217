//! Trade-plan construction for qualifying buy events.
//!
//! The stop goes below the rolling support, buffered by a configurable
//! fraction to absorb noise; the target is the rolling resistance. Degenerate
//! geometry (stop at or above entry) yields a ratio of exactly `0.0` so a
//! minimum-RR comparison rejects the trade instead of anything raising.

use crate::{
    config::EngineConfig,
    errors::Error,
    models::{
        frame::IndicatorFrame,
        plan::TradePlan,
        signal::{SignalEvent, SignalKind},
    },
};

/// Builds the plan for one buy event.
///
/// Returns `None` when the event is not a qualifying buy: either it is a
/// sell, or the support/resistance levels at its bar are still warming up.
pub fn plan_for_event(
    frame: &IndicatorFrame,
    event: &SignalEvent,
    config: &EngineConfig,
) -> Option<TradePlan> {
    if event.kind != SignalKind::Buy {
        return None;
    }
    let row = &frame.rows[event.index];
    let (support, resistance) = (row.support?, row.resistance?);

    let entry = frame.bars[event.index].close;
    let stop_loss = support * (1.0 - config.stop_loss_buffer);
    let take_profit = resistance;

    let risk = entry - stop_loss;
    let reward = take_profit - entry;
    let risk_reward_ratio = if risk > 0.0 { reward / risk } else { 0.0 };

    Some(TradePlan {
        index: event.index,
        timestamp: event.timestamp,
        entry,
        stop_loss,
        take_profit,
        risk_reward_ratio,
        meets_min_rr: risk_reward_ratio >= config.min_risk_reward,
    })
}

/// The plan for the most recent qualifying buy event, if any.
pub fn latest_plan_opt(
    frame: &IndicatorFrame,
    events: &[SignalEvent],
    config: &EngineConfig,
) -> Option<TradePlan> {
    events
        .iter()
        .rev()
        .find_map(|event| plan_for_event(frame, event, config))
}

/// Like [`latest_plan_opt`], but an absent buy event is the explicit
/// [`Error::NoSignal`] outcome for callers that require a plan.
pub fn latest_plan(
    frame: &IndicatorFrame,
    events: &[SignalEvent],
    config: &EngineConfig,
) -> Result<TradePlan, Error> {
    latest_plan_opt(frame, events, config).ok_or(Error::NoSignal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        bar::Bar,
        frame::IndicatorRow,
        timeframe::TimeFrame,
    };
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
    }

    fn frame_one_row(close: f64, support: Option<f64>, resistance: Option<f64>) -> IndicatorFrame {
        IndicatorFrame {
            symbol: "TEST".into(),
            timeframe: TimeFrame::daily(),
            bars: vec![Bar {
                timestamp: t0(),
                open: close,
                high: close * 1.2,
                low: close * 0.8,
                close,
                volume: 1_000.0,
            }],
            rows: vec![IndicatorRow {
                support,
                resistance,
                ..Default::default()
            }],
        }
    }

    fn buy(index: usize) -> SignalEvent {
        SignalEvent {
            index,
            timestamp: t0() + Duration::days(index as i64),
            kind: SignalKind::Buy,
        }
    }

    fn close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn worked_example() {
        // entry 100, support 95, buffer 0.02, resistance 110:
        // stop 93.1, risk 6.9, reward 10, ratio ~1.449
        let frame = frame_one_row(100.0, Some(95.0), Some(110.0));
        let plan = plan_for_event(&frame, &buy(0), &EngineConfig::default()).unwrap();

        close(plan.entry, 100.0);
        close(plan.stop_loss, 93.1);
        close(plan.take_profit, 110.0);
        close(plan.risk_reward_ratio, 10.0 / 6.9);
        assert!(!plan.meets_min_rr); // 1.449 < default 1.5
    }

    #[test]
    fn degenerate_geometry_reports_zero_ratio() {
        // Support sits above the entry, so the stop is at/above it too.
        let frame = frame_one_row(100.0, Some(110.0), Some(120.0));
        let plan = plan_for_event(&frame, &buy(0), &EngineConfig::default()).unwrap();
        assert_eq!(plan.risk_reward_ratio, 0.0);
        assert!(!plan.meets_min_rr);
    }

    #[test]
    fn sell_event_is_not_qualifying() {
        let frame = frame_one_row(100.0, Some(95.0), Some(110.0));
        let sell = SignalEvent {
            kind: SignalKind::Sell,
            ..buy(0)
        };
        assert!(plan_for_event(&frame, &sell, &EngineConfig::default()).is_none());
    }

    #[test]
    fn warming_up_levels_are_not_qualifying() {
        let frame = frame_one_row(100.0, None, Some(110.0));
        assert!(plan_for_event(&frame, &buy(0), &EngineConfig::default()).is_none());
    }

    #[test]
    fn no_buy_event_is_explicit_outcome() {
        let frame = frame_one_row(100.0, Some(95.0), Some(110.0));
        let err = latest_plan(&frame, &[], &EngineConfig::default()).unwrap_err();
        assert!(matches!(err, Error::NoSignal));
    }

    #[test]
    fn latest_qualifying_buy_wins() {
        let mk_bar = |day: i64, close: f64| Bar {
            timestamp: t0() + Duration::days(day),
            open: close,
            high: close * 1.2,
            low: close * 0.8,
            close,
            volume: 1_000.0,
        };
        let mk_row = |support: f64| IndicatorRow {
            support: Some(support),
            resistance: Some(130.0),
            ..Default::default()
        };
        let frame = IndicatorFrame {
            symbol: "TEST".into(),
            timeframe: TimeFrame::daily(),
            bars: vec![mk_bar(0, 100.0), mk_bar(1, 104.0), mk_bar(2, 108.0)],
            rows: vec![mk_row(95.0), mk_row(96.0), mk_row(97.0)],
        };
        let events = vec![buy(0), buy(2)];
        let plan = latest_plan(&frame, &events, &EngineConfig::default()).unwrap();
        assert_eq!(plan.index, 2);
        close(plan.entry, 108.0);
    }
}
