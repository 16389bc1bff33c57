use crate::glyph::Glyph;

/// Read-only source of glyph outlines.
///
/// Implementations must be pure: the same character always yields the same
/// glyph for the lifetime of the provider.
pub trait GlyphProvider {
    /// Outline for `ch`, or `None` when the character is not supported.
    fn glyph(&self, ch: char) -> Option<&Glyph>;

    /// Height of a capital letter in glyph units.
    fn cap_height(&self) -> f64 {
        1.0
    }

    fn contains(&self, ch: char) -> bool {
        self.glyph(ch).is_some()
    }
}
