//! Engine configuration: defaults, TOML loading, and eager validation.
//!
//! Every tunable of the pipeline lives here so that an evaluation is a pure
//! function of `(series, config)`. Files use TOML with the same field names;
//! unknown keys are rejected to catch typos early.
//!
//! The confluence thresholds (`near_pct`, `rsi_buy_threshold`,
//! `rsi_sell_threshold`) are configuration, not fixed behavior; the defaults
//! are starting points meant to be tuned against historical data.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{errors::Error, signals::SignalMode};

/// All tunables for one evaluation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Fast EMA period for the MACD line.
    pub fast_period: usize,
    /// Slow EMA period for the MACD line.
    pub slow_period: usize,
    /// Smoothing period for the MACD signal line.
    pub signal_period: usize,
    /// RSI look-back period.
    pub rsi_period: usize,
    /// Rolling window for support/resistance levels.
    pub sr_window: usize,
    /// Rolling window for the volume baseline.
    pub volume_window: usize,
    /// Upper wick must exceed `body × rejection_multiplier` to flag rejection.
    pub rejection_multiplier: f64,
    /// The high must reach `resistance × proximity_factor` to flag rejection.
    pub proximity_factor: f64,
    /// Price-proximity band around support/resistance for confluence.
    pub near_pct: f64,
    /// RSI below this (and rising) counts as an oversold reversal.
    pub rsi_buy_threshold: f64,
    /// RSI above this (and falling) counts as an overbought reversal.
    pub rsi_sell_threshold: f64,
    /// Stop-loss buffer below support, as a fraction of the level.
    pub stop_loss_buffer: f64,
    /// Minimum acceptable risk:reward ratio for a plan to pass.
    pub min_risk_reward: f64,
    /// Which detector to run: plain crossovers or full confluence.
    pub mode: SignalMode,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fast_period: 12,
            slow_period: 26,
            signal_period: 9,
            rsi_period: 14,
            sr_window: 20,
            volume_window: 20,
            rejection_multiplier: 1.5,
            proximity_factor: 0.98,
            near_pct: 0.02,
            rsi_buy_threshold: 40.0,
            rsi_sell_threshold: 70.0,
            stop_loss_buffer: 0.02,
            min_risk_reward: 1.5,
            mode: SignalMode::Crossover,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a config from a TOML string.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, Error> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a config TOML file from disk.
    pub fn from_toml_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&text)
    }

    /// Load from an explicit path, the `SIGNAL_SCAN_CONFIG` environment
    /// variable, or fall back to the built-in defaults.
    pub fn resolve(explicit: Option<&str>) -> Result<Self, Error> {
        match shared_utils::config::resolve_config_path(explicit) {
            Some(path) => Self::from_toml_path(path),
            None => Ok(Self::default()),
        }
    }

    /// Rejects out-of-range values with a descriptive reason, before any
    /// computation runs.
    pub fn validate(&self) -> Result<(), Error> {
        fn reject(reason: impl Into<String>) -> Result<(), Error> {
            Err(Error::Config(reason.into()))
        }

        for (name, value) in [
            ("fast_period", self.fast_period),
            ("slow_period", self.slow_period),
            ("signal_period", self.signal_period),
            ("rsi_period", self.rsi_period),
            ("sr_window", self.sr_window),
            ("volume_window", self.volume_window),
        ] {
            if value == 0 {
                return reject(format!("{name} must be at least 1"));
            }
        }
        if self.fast_period >= self.slow_period {
            return reject(format!(
                "fast_period ({}) must be less than slow_period ({})",
                self.fast_period, self.slow_period
            ));
        }
        if !(self.rejection_multiplier > 0.0 && self.rejection_multiplier.is_finite()) {
            return reject("rejection_multiplier must be positive");
        }
        if !(self.proximity_factor > 0.0 && self.proximity_factor <= 1.0) {
            return reject("proximity_factor must be within (0, 1]");
        }
        if !(self.near_pct >= 0.0 && self.near_pct < 1.0) {
            return reject("near_pct must be within [0, 1)");
        }
        for (name, value) in [
            ("rsi_buy_threshold", self.rsi_buy_threshold),
            ("rsi_sell_threshold", self.rsi_sell_threshold),
        ] {
            if !(value > 0.0 && value < 100.0) {
                return reject(format!("{name} must be within (0, 100)"));
            }
        }
        if !(self.stop_loss_buffer > 0.0 && self.stop_loss_buffer < 1.0) {
            return reject("stop_loss_buffer must be within (0, 1)");
        }
        if !(self.min_risk_reward >= 0.0 && self.min_risk_reward.is_finite()) {
            return reject("min_risk_reward must be non-negative");
        }
        Ok(())
    }

    /// The smallest series length for which every indicator column has at
    /// least one defined value: `slow_period` for the MACD line, one full
    /// delta window for RSI, and the rolling windows for levels and volume.
    pub fn min_required_bars(&self) -> usize {
        self.slow_period
            .max(self.rsi_period + 1)
            .max(self.sr_window)
            .max(self.volume_window)
    }
}
