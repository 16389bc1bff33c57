//! Configuration and settings management for SandSkrit
//!
//! Provides configuration file handling and validation.
//! Supports JSON and TOML file formats.
//!
//! Configuration is organized into logical sections:
//! - Path sampling (angular step, straight segment subdivision)
//! - Text layout (character spacing, line spacing, boundary tolerance)
//! - SVG preview output
//! - THR output

use crate::error::{ConfigError, ConfigResult, SettingsResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Path sampling settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathSettings {
    /// Angular step between consecutive samples of spirals and loops, in degrees
    pub angular_step_degrees: f64,
    /// Longest straight sub-segment; longer lines are subdivided
    pub max_segment_length: f64,
    /// Points closer than this to the previous point are dropped
    pub point_epsilon: f64,
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            angular_step_degrees: 1.0,
            max_segment_length: 1.0,
            point_epsilon: 1e-6,
        }
    }
}

/// Text layout settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextSettings {
    /// Space before and after every glyph, in glyph units
    pub character_spacing: f64,
    /// Advance of a space character, in glyph units
    pub space_width: f64,
    /// Default line pitch for multi-line text, as a multiple of the line scale
    pub line_spacing: f64,
    /// Slack allowed when checking geometry against the boundary radius
    pub boundary_tolerance: f64,
}

impl Default for TextSettings {
    fn default() -> Self {
        Self {
            character_spacing: 0.1,
            space_width: 0.5,
            line_spacing: 1.4,
            boundary_tolerance: 1e-3,
        }
    }
}

/// SVG preview settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SvgSettings {
    /// Canvas edge length (the canvas is square)
    pub size: u32,
    /// Stroke colour
    pub stroke: String,
    /// Stroke width in canvas units
    pub stroke_width: f64,
    /// Empty margin between the drawing and the canvas edge
    pub padding: f64,
    /// Decimal places for coordinates
    pub precision: usize,
    /// Draw the boundary circle behind the path
    pub draw_boundary: bool,
}

impl Default for SvgSettings {
    fn default() -> Self {
        Self {
            size: 200,
            stroke: "black".to_string(),
            stroke_width: 0.5,
            padding: 2.0,
            precision: 3,
            draw_boundary: false,
        }
    }
}

/// THR output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThrSettings {
    /// Decimal places for theta and rho
    pub precision: usize,
}

impl Default for ThrSettings {
    fn default() -> Self {
        Self { precision: 5 }
    }
}

/// Complete configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub path: PathSettings,
    pub text: TextSettings,
    pub svg: SvgSettings,
    pub thr: ThrSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format_of(path)? {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load config from file if it exists, otherwise return defaults
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        let step = self.path.angular_step_degrees;
        if !step.is_finite() || step <= 0.0 || step > 90.0 {
            return Err(reject("path.angular_step_degrees", step));
        }

        let seg = self.path.max_segment_length;
        if !seg.is_finite() || seg <= 0.0 {
            return Err(reject("path.max_segment_length", seg));
        }

        let eps = self.path.point_epsilon;
        if !eps.is_finite() || eps < 0.0 || eps >= seg {
            return Err(reject("path.point_epsilon", eps));
        }

        if !self.text.character_spacing.is_finite() || self.text.character_spacing < 0.0 {
            return Err(reject("text.character_spacing", self.text.character_spacing));
        }

        if !self.text.space_width.is_finite() || self.text.space_width < 0.0 {
            return Err(reject("text.space_width", self.text.space_width));
        }

        if !self.text.line_spacing.is_finite() || self.text.line_spacing <= 0.0 {
            return Err(reject("text.line_spacing", self.text.line_spacing));
        }

        if !self.text.boundary_tolerance.is_finite() || self.text.boundary_tolerance < 0.0 {
            return Err(reject("text.boundary_tolerance", self.text.boundary_tolerance));
        }

        if self.svg.size == 0 {
            return Err(reject("svg.size", self.svg.size));
        }

        if !self.svg.stroke_width.is_finite() || self.svg.stroke_width <= 0.0 {
            return Err(reject("svg.stroke_width", self.svg.stroke_width));
        }

        if !self.svg.padding.is_finite()
            || self.svg.padding < 0.0
            || self.svg.padding * 2.0 >= self.svg.size as f64
        {
            return Err(reject("svg.padding", self.svg.padding));
        }

        if self.svg.precision > 12 {
            return Err(reject("svg.precision", self.svg.precision));
        }

        if self.thr.precision == 0 || self.thr.precision > 12 {
            return Err(reject("thr.precision", self.thr.precision));
        }

        Ok(())
    }
}

/// Default location of the configuration file: `<config dir>/sandskrit/config.toml`
pub fn default_config_path() -> ConfigResult<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join("sandskrit").join("config.toml"))
        .ok_or_else(|| ConfigError::UnsupportedPlatform(std::env::consts::OS.to_string()))
}

enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> ConfigResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(ConfigError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

fn reject(key: &str, value: impl ToString) -> ConfigError {
    let err = ConfigError::out_of_range(key, value);
    warn!("Rejected configuration: {}", err);
    err
}
