//! Glyph tables.
//!
//! The bundled table is embedded at compile time and parsed on first use.
//! Custom tables use the same JSON layout:
//!
//! ```json
//! { "A": { "path": [[0, 0], [0.35, -1], [0.7, 0]], "width": 0.7, "start_offset": 0.0 } }
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use tracing::debug;

use crate::error::{GlyphError, GlyphResult};
use crate::glyph::Glyph;
use crate::provider::GlyphProvider;

const BUNDLED_GLYPHS: &str = include_str!("../assets/glyphs.json");

/// A character to glyph mapping. Capitals are one glyph unit tall.
#[derive(Debug, Clone, Default)]
pub struct GlyphTable {
    glyphs: HashMap<char, Glyph>,
}

impl GlyphTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The table shipped with the crate, parsed once per process.
    pub fn builtin() -> &'static GlyphTable {
        static TABLE: OnceLock<GlyphTable> = OnceLock::new();
        TABLE.get_or_init(|| {
            GlyphTable::from_json_str(BUNDLED_GLYPHS)
                .unwrap_or_else(|e| panic!("bundled glyph table is invalid: {e}"))
        })
    }

    /// Parses a table from its JSON form and validates every entry.
    pub fn from_json_str(json: &str) -> GlyphResult<Self> {
        let raw: BTreeMap<String, Glyph> = serde_json::from_str(json)?;
        let mut table = GlyphTable::new();
        for (key, glyph) in raw {
            let mut chars = key.chars();
            let ch = match (chars.next(), chars.next()) {
                (Some(ch), None) => ch,
                _ => return Err(GlyphError::InvalidKey(key)),
            };
            table.insert(ch, glyph)?;
        }
        debug!("Loaded glyph table with {} glyphs", table.len());
        Ok(table)
    }

    /// Loads a JSON table from disk.
    pub fn load_from_file(path: &Path) -> GlyphResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Serializes the table back to its JSON form, keys sorted.
    pub fn to_json_string(&self) -> GlyphResult<String> {
        let sorted: BTreeMap<String, &Glyph> = self
            .glyphs
            .iter()
            .map(|(ch, glyph)| (ch.to_string(), glyph))
            .collect();
        Ok(serde_json::to_string_pretty(&sorted)?)
    }

    /// Adds or replaces a glyph after validating it.
    pub fn insert(&mut self, ch: char, glyph: Glyph) -> GlyphResult<()> {
        validate(ch, &glyph)?;
        self.glyphs.insert(ch, glyph);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Supported characters in sorted order.
    pub fn characters(&self) -> Vec<char> {
        let mut chars: Vec<char> = self.glyphs.keys().copied().collect();
        chars.sort_unstable();
        chars
    }
}

impl GlyphProvider for GlyphTable {
    fn glyph(&self, ch: char) -> Option<&Glyph> {
        self.glyphs.get(&ch)
    }
}

fn validate(ch: char, glyph: &Glyph) -> GlyphResult<()> {
    let invalid = |reason: &str| GlyphError::InvalidGlyph {
        ch,
        reason: reason.to_string(),
    };

    if !glyph.width.is_finite() || glyph.width <= 0.0 {
        return Err(invalid("width must be positive"));
    }
    if !glyph.start_offset.is_finite() {
        return Err(invalid("start offset must be finite"));
    }
    if glyph.path.is_empty() {
        return Err(invalid("path is empty"));
    }
    if glyph.path.iter().any(|p| !p.is_finite()) {
        return Err(invalid("path contains a non-finite point"));
    }
    Ok(())
}
