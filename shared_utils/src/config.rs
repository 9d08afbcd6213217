use std::path::PathBuf;

use crate::env::get_env_var_opt;

/// Environment variable holding a default engine-config file path.
pub const CONFIG_PATH_VAR: &str = "SIGNAL_SCAN_CONFIG";

/// Resolves a config-file path from an explicit argument or the environment.
///
/// Precedence: an explicit path wins; otherwise [`CONFIG_PATH_VAR`] is
/// consulted; `None` means "use built-in defaults".
pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
    explicit
        .map(PathBuf::from)
        .or_else(|| get_env_var_opt(CONFIG_PATH_VAR).map(PathBuf::from))
}
