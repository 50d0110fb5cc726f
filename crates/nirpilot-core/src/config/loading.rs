//! Configuration loading and merging logic.
//!
//! Configuration is loaded in the following order (later sources override
//! earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.nirpilot/config.toml`
//! 3. **Project config** - `./.nirpilot/config.toml`

use crate::config::types::PilotConfig;
use crate::errors::ConfigError;
use std::fs;
use std::path::Path;

/// Load configuration from the hierarchy of config files.
///
/// # Errors
///
/// Returns an error on parse failures. Missing config files are not errors.
pub fn load_hierarchy() -> Result<PilotConfig, ConfigError> {
    let mut config = PilotConfig::default();

    // Load user config (file not found is expected, parse errors fail)
    match load_user_config() {
        Ok(user_config) => config = merge_configs(config, user_config),
        Err(ConfigError::ConfigNotFound { .. }) => {}
        Err(e) => return Err(e),
    }

    // Load project config (file not found is expected, parse errors fail)
    match load_project_config() {
        Ok(project_config) => config = merge_configs(config, project_config),
        Err(ConfigError::ConfigNotFound { .. }) => {}
        Err(e) => return Err(e),
    }

    Ok(config)
}

/// Load the user configuration from ~/.nirpilot/config.toml.
fn load_user_config() -> Result<PilotConfig, ConfigError> {
    let home_dir = dirs::home_dir().ok_or(ConfigError::InvalidConfiguration {
        message: "Could not find home directory".to_string(),
    })?;
    let config_path = home_dir.join(".nirpilot").join("config.toml");
    load_config_file(&config_path)
}

/// Load the project configuration from ./.nirpilot/config.toml.
fn load_project_config() -> Result<PilotConfig, ConfigError> {
    let config_path = std::env::current_dir()?.join(".nirpilot").join("config.toml");
    load_config_file(&config_path)
}

/// Load a configuration file from the given path.
pub fn load_config_file(path: &Path) -> Result<PilotConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ConfigError::ConfigNotFound {
                path: path.display().to_string(),
            }
        } else {
            ConfigError::IoError { source: e }
        }
    })?;
    let config: PilotConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
            message: format!("'{}': {}", path.display(), e),
        })?;
    Ok(config)
}

/// Merge two configurations, with `overlay` values taking precedence.
fn merge_configs(base: PilotConfig, overlay: PilotConfig) -> PilotConfig {
    PilotConfig {
        runner: crate::config::types::RunnerConfig {
            binary_path: overlay.runner.binary_path.or(base.runner.binary_path),
        },
    }
}
