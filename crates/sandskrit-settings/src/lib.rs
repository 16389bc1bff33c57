//! SandSkrit Settings Crate
//!
//! Handles drawing and export configuration, loading and saving it as JSON
//! or TOML, and resolving the default configuration location.

pub mod config;
pub mod error;

pub use config::{default_config_path, Config, PathSettings, SvgSettings, TextSettings, ThrSettings};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
