//! Rule-based trading-signal detection and risk planning over OHLCV series.
//!
//! The engine is a pure function of `(series, config)`: it derives indicator
//! columns (MACD, RSI, rolling support/resistance, volume baseline, candle
//! shape), fuses them into discrete buy/sell events, and computes a trade
//! plan for the most recent qualifying buy. Data retrieval and rendering live
//! outside this crate; see [`evaluate::evaluate`] for the entry point.

#[cfg(feature = "cli")]
pub mod cli;

pub mod advisory;
pub mod config;
pub mod errors;
pub mod evaluate;
pub mod indicators;
pub mod models;
pub mod risk;
pub mod signals;

pub use config::EngineConfig;
pub use errors::Error;
pub use evaluate::{Evaluation, evaluate};
pub use signals::SignalMode;
