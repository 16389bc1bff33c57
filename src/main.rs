use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use sandskrit::{default_config_path, init_logging, Config, GlyphProvider, GlyphTable, Recipe};
use tracing::{debug, info};

/// Draws a continuous sand-table pattern and writes it as SVG and THR.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Recipe file (JSON or TOML). Without one the built-in sample pattern
    /// is drawn.
    #[arg(long)]
    recipe: Option<PathBuf>,

    /// Configuration file (JSON or TOML). Defaults to the per-user
    /// configuration when it exists.
    #[arg(long, env = "SANDSKRIT_CONFIG")]
    config: Option<PathBuf>,

    /// Glyph table to use instead of the bundled one.
    #[arg(long)]
    glyphs: Option<PathBuf>,

    /// Write the SVG preview here.
    #[arg(long)]
    svg: Option<PathBuf>,

    /// Write the THR track here.
    #[arg(long)]
    thr: Option<PathBuf>,

    /// SVG canvas size, overriding the configuration.
    #[arg(long)]
    size: Option<u32>,

    /// Write the default configuration to this file and exit.
    #[arg(long, value_name = "FILE")]
    write_default_config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging()?;
    debug!("sandskrit {} built {}", sandskrit::VERSION, sandskrit::BUILD_DATE);

    if let Some(path) = &args.write_default_config {
        Config::default()
            .save_to_file(path)
            .with_context(|| format!("writing {}", path.display()))?;
        info!("Wrote default configuration to {}", path.display());
        return Ok(());
    }

    let config = load_config(&args)?;

    let custom = match &args.glyphs {
        Some(path) => Some(
            GlyphTable::load_from_file(path)
                .with_context(|| format!("loading glyphs from {}", path.display()))?,
        ),
        None => None,
    };
    let glyphs: &dyn GlyphProvider = match &custom {
        Some(table) => table,
        None => GlyphTable::builtin(),
    };

    let recipe = match &args.recipe {
        Some(path) => Recipe::load_from_file(path)?,
        None => {
            info!("No recipe given, drawing the sample pattern");
            Recipe::sample()
        }
    };
    let builder = recipe.build(glyphs, &config)?;

    // Without explicit outputs, write both next to the working directory
    let (svg, thr) = match (&args.svg, &args.thr) {
        (None, None) => (
            Some(PathBuf::from("sandskrit.svg")),
            Some(PathBuf::from("sandskrit.thr")),
        ),
        (svg, thr) => (svg.clone(), thr.clone()),
    };

    if let Some(path) = svg {
        let size = args.size.unwrap_or(config.svg.size);
        builder
            .save_svg(&path, size)
            .with_context(|| format!("writing SVG to {}", path.display()))?;
    }
    if let Some(path) = thr {
        builder
            .save_thr(&path)
            .with_context(|| format!("writing THR to {}", path.display()))?;
    }

    Ok(())
}

fn load_config(args: &Args) -> anyhow::Result<Config> {
    if let Some(path) = &args.config {
        return Config::load_from_file(path)
            .with_context(|| format!("loading configuration {}", path.display()));
    }
    match default_config_path() {
        Ok(path) => Config::load_or_default(&path)
            .with_context(|| format!("loading configuration {}", path.display())),
        Err(e) => {
            debug!("{}, using default configuration", e);
            Ok(Config::default())
        }
    }
}
