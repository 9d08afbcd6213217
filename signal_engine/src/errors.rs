use thiserror::Error;

use crate::models::series::SeriesError;

/// The unified error type for the `signal_engine` crate.
#[derive(Debug, Error)]
pub enum Error {
    /// A configuration value is out of its valid range. Rejected before any
    /// computation begins.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The input series violates a bar invariant.
    #[error("Invalid bar series: {0}")]
    Series(#[from] SeriesError),

    /// The series is shorter than the largest required warm-up window.
    /// Nothing is computed; partially-filled indicator columns would be
    /// misleading.
    #[error("Insufficient data: {required} bars required, {actual} provided")]
    InsufficientData { required: usize, actual: usize },

    /// A trade plan was requested but no qualifying buy event exists.
    #[error("No qualifying buy signal in series")]
    NoSignal,

    /// A generic I/O error (config or input files).
    #[error("I/O error")]
    Io(#[from] std::io::Error),

    /// Malformed JSON input.
    #[error("JSON parse error")]
    Json(#[from] serde_json::Error),

    /// Malformed TOML configuration.
    #[error("TOML parse error")]
    Toml(#[from] toml::de::Error),
}
