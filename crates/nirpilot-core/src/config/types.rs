//! Configuration type definitions for nirpilot.
//!
//! These types are serialized/deserialized from TOML config files.
//!
//! # Example Configuration
//!
//! ```toml
//! [runner]
//! binary_path = "C:\\tools\\nircmd.exe"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration loaded from TOML config files.
///
/// Loaded from:
/// 1. User config: `~/.nirpilot/config.toml`
/// 2. Project config: `./.nirpilot/config.toml`
///
/// Project config values override user config values.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PilotConfig {
    /// Settings for invoking the external automation executable.
    #[serde(default)]
    pub runner: RunnerConfig,
}

/// Settings for the external process invoker.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RunnerConfig {
    /// Explicit path to the NirCmd executable.
    ///
    /// When unset, the executable is looked up on PATH.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub binary_path: Option<PathBuf>,
}

impl PilotConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`crate::config::loading::load_hierarchy`].
    pub fn load_hierarchy() -> Result<Self, crate::errors::ConfigError> {
        super::loading::load_hierarchy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_has_no_binary_path() {
        let config = PilotConfig::default();
        assert!(config.runner.binary_path.is_none());
    }

    #[test]
    fn test_config_roundtrip() {
        let toml_str = r#"
[runner]
binary_path = "/opt/nircmd/nircmd.exe"
"#;
        let config: PilotConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.runner.binary_path,
            Some(PathBuf::from("/opt/nircmd/nircmd.exe"))
        );

        let serialized = toml::to_string(&config).unwrap();
        let reparsed: PilotConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(reparsed.runner.binary_path, config.runner.binary_path);
    }

    #[test]
    fn test_empty_config_parses() {
        let config: PilotConfig = toml::from_str("").unwrap();
        assert!(config.runner.binary_path.is_none());
    }
}
