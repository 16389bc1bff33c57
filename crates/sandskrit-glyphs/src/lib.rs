//! # SandSkrit Glyphs
//!
//! Single-stroke glyph outlines used to write text with one continuous line.
//!
//! - [`Glyph`]: a character's relative outline, advance width and start offset
//! - [`GlyphProvider`]: the read-only lookup the path builder consumes
//! - [`GlyphTable`]: the bundled table, or one loaded from a JSON file

pub mod error;
pub mod glyph;
pub mod provider;
pub mod table;

pub use error::{GlyphError, GlyphResult};
pub use glyph::Glyph;
pub use provider::GlyphProvider;
pub use table::GlyphTable;
