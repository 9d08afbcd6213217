//! Command-line types for the `signal-scan` binary.

pub mod commands;
