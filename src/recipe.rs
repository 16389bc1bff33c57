//! Recipes: a pattern written down as data.
//!
//! A recipe names the starting point, an optional boundary and an ordered
//! list of builder steps. Recipes load from JSON or TOML:
//!
//! ```toml
//! start = [0, 0]
//!
//! [[steps]]
//! op = "spiral_out"
//! radius = 100
//! turns = 30
//!
//! [[steps]]
//! op = "lines"
//! lines = [{ text = "Hello", scale = 12 }]
//!
//! [[steps]]
//! op = "outer_loop"
//! turns = 2
//! ```

use std::fs;
use std::path::Path;

use anyhow::{bail, Context};
use sandskrit_core::Point;
use sandskrit_glyphs::GlyphProvider;
use sandskrit_path::{LineConfig, PathBuilder};
use sandskrit_settings::Config;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// One builder operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    SpiralOut {
        radius: f64,
        turns: f64,
        #[serde(default)]
        ending_angle: f64,
    },
    SpiralIn {
        turns: f64,
    },
    OuterLoop {
        turns: f64,
        #[serde(default)]
        ending_angle: f64,
    },
    Line {
        length: f64,
        #[serde(default)]
        angle: f64,
    },
    Text {
        text: String,
        scale: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        offset: Option<[f64; 2]>,
    },
    Lines {
        lines: Vec<LineConfig>,
        /// Falls back to the configured line spacing
        #[serde(default, skip_serializing_if = "Option::is_none")]
        line_spacing: Option<f64>,
    },
}

impl Step {
    pub fn name(&self) -> &'static str {
        match self {
            Step::SpiralOut { .. } => "spiral_out",
            Step::SpiralIn { .. } => "spiral_in",
            Step::OuterLoop { .. } => "outer_loop",
            Step::Line { .. } => "line",
            Step::Text { .. } => "text",
            Step::Lines { .. } => "lines",
        }
    }

    fn apply(
        &self,
        builder: &mut PathBuilder<'_>,
        config: &Config,
    ) -> sandskrit_core::PathResult<()> {
        match self {
            Step::SpiralOut {
                radius,
                turns,
                ending_angle,
            } => builder.add_spiral_out(*radius, *turns, *ending_angle),
            Step::SpiralIn { turns } => builder.add_spiral_in(*turns),
            Step::OuterLoop {
                turns,
                ending_angle,
            } => builder.add_outer_loop(*turns, *ending_angle),
            Step::Line { length, angle } => builder.add_line(*length, *angle),
            Step::Text {
                text,
                scale,
                offset,
            } => match offset {
                Some([x, y]) => builder.add_string_offset(text, *scale, Point::new(*x, *y)),
                None => builder.add_string(text, *scale),
            },
            Step::Lines {
                lines,
                line_spacing,
            } => builder.add_lines_of_text(lines, line_spacing.unwrap_or(config.text.line_spacing)),
        }
    }
}

/// A complete pattern description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(default)]
    pub start: [f64; 2],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boundary_radius: Option<f64>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Recipe {
    /// The pattern drawn when no recipe is given: a spiral out to the rim,
    /// a centred greeting, and two laps around the edge.
    pub fn sample() -> Self {
        Self {
            start: [0.0, 0.0],
            boundary_radius: None,
            steps: vec![
                Step::SpiralOut {
                    radius: 100.0,
                    turns: 30.0,
                    ending_angle: 0.0,
                },
                Step::Lines {
                    lines: vec![
                        LineConfig::new("Welcome to", 10.0),
                        LineConfig::new("SandSkrit", 18.0),
                        LineConfig::new("continuous path", 10.0),
                        LineConfig::new("text for sand", 10.0),
                    ],
                    line_spacing: None,
                },
                Step::OuterLoop {
                    turns: 2.0,
                    ending_angle: 0.0,
                },
            ],
        }
    }

    /// Load a recipe from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading recipe {}", path.display()))?;

        let recipe = match extension(path) {
            Some("json") => serde_json::from_str(&content)
                .with_context(|| format!("parsing JSON recipe {}", path.display()))?,
            Some("toml") => toml::from_str(&content)
                .with_context(|| format!("parsing TOML recipe {}", path.display()))?,
            other => bail!(
                "unsupported recipe format '{}' for {}",
                other.unwrap_or("<none>"),
                path.display()
            ),
        };

        debug!("Loaded recipe from {}", path.display());
        Ok(recipe)
    }

    /// Save a recipe to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let content = match extension(path) {
            Some("json") => serde_json::to_string_pretty(self)?,
            Some("toml") => toml::to_string_pretty(self)?,
            other => bail!("unsupported recipe format '{}'", other.unwrap_or("<none>")),
        };
        fs::write(path, content).with_context(|| format!("writing recipe {}", path.display()))?;
        Ok(())
    }

    /// Runs every step on a fresh builder.
    pub fn build<'g>(
        &self,
        glyphs: &'g dyn GlyphProvider,
        config: &Config,
    ) -> anyhow::Result<PathBuilder<'g>> {
        let [x, y] = self.start;
        let mut builder = PathBuilder::with_glyphs(x, y, glyphs).with_config(config);
        if let Some(radius) = self.boundary_radius {
            builder
                .set_boundary_radius(radius)
                .context("invalid recipe boundary")?;
        }

        for (index, step) in self.steps.iter().enumerate() {
            step.apply(&mut builder, config)
                .with_context(|| format!("step {} ({}) failed", index + 1, step.name()))?;
        }

        info!(
            "Built {} points from {} steps",
            builder.len(),
            self.steps.len()
        );
        Ok(builder)
    }
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}
