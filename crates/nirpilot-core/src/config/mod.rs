//! Configuration management for nirpilot.
//!
//! Configuration is loaded from TOML files in a hierarchy:
//! user config (`~/.nirpilot/config.toml`) first, then project config
//! (`./.nirpilot/config.toml`) which overrides it.

pub mod loading;
pub mod types;

pub use types::{PilotConfig, RunnerConfig};
