use std::env;

use thiserror::Error;

/// An environment variable required by the application is not set.
#[derive(Debug, Error)]
#[error("Missing environment variable: {0}")]
pub struct MissingEnvVarError(pub String);

/// Reads an environment variable, returning a structured error if it's missing.
pub fn get_env_var(name: &str) -> Result<String, MissingEnvVarError> {
    env::var(name).map_err(|_| MissingEnvVarError(name.to_string()))
}

/// Reads an environment variable, returning `None` if it's missing or empty.
///
/// Useful for optional overrides (e.g. a config-file path) where absence is
/// not an error.
pub fn get_env_var_opt(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}
