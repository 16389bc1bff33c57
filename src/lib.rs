//! # SandSkrit
//!
//! Continuous single-stroke drawings for sand tables. A pattern is one
//! unbroken line built from spirals, loops, straight lines and text, then
//! exported as an SVG preview and a THR theta-rho track.
//!
//! ## Architecture
//!
//! SandSkrit is organized as a workspace with multiple crates:
//!
//! 1. **sandskrit-core** - Points, polar helpers, error types
//! 2. **sandskrit-glyphs** - Single-stroke glyph tables
//! 3. **sandskrit-settings** - Configuration files and validation
//! 4. **sandskrit-export** - SVG and THR output
//! 5. **sandskrit-path** - The path builder
//! 6. **sandskrit** - Recipes, logging and the command line tool

pub mod recipe;

pub use recipe::{Recipe, Step};

pub use sandskrit_core::{Error, ExportError, PathError, Point, Result};
pub use sandskrit_export::{parse_thr, PolarPoint, SvgExporter, ThrExporter};
pub use sandskrit_glyphs::{Glyph, GlyphError, GlyphProvider, GlyphTable};
pub use sandskrit_path::{LineConfig, PathBuilder, TextMetrics};
pub use sandskrit_settings::{
    default_config_path, Config, PathSettings, SettingsError, SvgSettings, TextSettings,
    ThrSettings,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging
///
/// Log lines go to stderr so rendered output can be piped. The filter comes
/// from `RUST_LOG` and defaults to `info`.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
