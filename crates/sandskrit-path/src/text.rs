//! Single-stroke text layout.
//!
//! Text is laid out in a local baseline frame (glyph units times scale, `y`
//! down toward descenders) and mapped to the table through a [`TextFrame`].
//! The whole string is one continuous stroke: the pen runs along the baseline
//! between glyphs, steps up into each outline, and drops back to the baseline
//! when an outline ends above it.
//!
//! Spacing is fixed: `character_spacing` before and after every glyph and
//! `space_width` for a space, both in glyph units.
//!
//! With debug marks on, short vertical ticks show where each glyph's spacing
//! starts and ends: tall ticks at the outer edges of the spacing, medium ticks
//! at the glyph box edges and a small tick where the outline returns to the
//! baseline.

use crate::stroke::Stroke;
use sandskrit_core::{PathError, PathResult, Point};
use sandskrit_glyphs::GlyphProvider;

/// Horizontal spacing in glyph units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct TextStyle {
    pub character_spacing: f64,
    pub space_width: f64,
    pub debug_marks: bool,
}

impl TextStyle {
    pub(crate) fn with_debug_marks(self, debug_marks: bool) -> Self {
        Self { debug_marks, ..self }
    }
}

/// Tick heights in glyph units.
const SPACING_MARK: f64 = 0.5;
const BOX_MARK: f64 = 0.2;
const OUTLINE_MARK: f64 = 0.1;

/// Extent of a string in scaled glyph units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextMetrics {
    /// Baseline length from the first cursor position to the last.
    pub width: f64,
    /// Highest point, negative when anything rises above the baseline.
    pub min_y: f64,
    /// Lowest point, positive when a descender drops below the baseline.
    pub max_y: f64,
}

impl TextMetrics {
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// Maps the local baseline frame onto the table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct TextFrame {
    origin: Point,
    right: Point,
    up: Point,
}

impl TextFrame {
    /// Unrotated frame: baseline along +x, glyphs rising toward +y.
    pub(crate) fn horizontal(origin: Point) -> Self {
        Self {
            origin,
            right: Point::new(1.0, 0.0),
            up: Point::new(0.0, 1.0),
        }
    }

    /// Frame for text written at `pen`: the baseline is tangent to the circle
    /// through the pen and glyphs rise toward the table centre.
    pub(crate) fn facing_centre(pen: Point, epsilon: f64) -> Self {
        if pen.radius() <= epsilon {
            return Self::horizontal(pen);
        }
        match (-pen).normalized() {
            Some(up) => Self {
                origin: pen,
                right: up.perp_cw(),
                up,
            },
            None => Self::horizontal(pen),
        }
    }

    /// Moves the origin by an offset expressed in the frame's own axes,
    /// `x` along the baseline and `y` toward glyph "up".
    pub(crate) fn shifted(self, offset: Point) -> Self {
        Self {
            origin: self.origin + self.right * offset.x + self.up * offset.y,
            ..self
        }
    }

    /// Local glyph coordinates (`y` positive below the baseline) to table
    /// coordinates.
    pub(crate) fn to_world(&self, local: Point) -> Point {
        self.origin + self.right * local.x + self.up * (-local.y)
    }
}

/// Measures `text` without drawing it.
pub(crate) fn measure(
    glyphs: &dyn GlyphProvider,
    text: &str,
    scale: f64,
    style: TextStyle,
) -> PathResult<TextMetrics> {
    let mut metrics = TextMetrics::default();
    for ch in text.chars() {
        if ch == ' ' {
            metrics.width += style.space_width * scale;
            continue;
        }
        let glyph = glyphs.glyph(ch).ok_or(PathError::UnknownCharacter(ch))?;
        metrics.width += (glyph.width + 2.0 * style.character_spacing) * scale;
        metrics.min_y = metrics.min_y.min(glyph.min_y() * scale);
        metrics.max_y = metrics.max_y.max(glyph.max_y() * scale);
    }
    Ok(metrics)
}

/// Draws `text` into `stroke`, starting with a straight move from the
/// stroke's cursor to the frame origin.
pub(crate) fn layout(
    stroke: &mut Stroke,
    glyphs: &dyn GlyphProvider,
    text: &str,
    scale: f64,
    style: TextStyle,
    frame: &TextFrame,
) -> PathResult<()> {
    let mut emit = |x: f64, y: f64| stroke.line_to(frame.to_world(Point::new(x, y)));
    let mark = |emit: &mut dyn FnMut(f64, f64), x: f64, height: f64| {
        if style.debug_marks {
            emit(x, -height * scale);
            emit(x, 0.0);
        }
    };
    let spacing = style.character_spacing * scale;
    let mut cursor = 0.0;
    emit(cursor, 0.0);

    for ch in text.chars() {
        if ch == ' ' {
            cursor += style.space_width * scale;
            emit(cursor, 0.0);
            continue;
        }

        let glyph = glyphs.glyph(ch).ok_or(PathError::UnknownCharacter(ch))?;

        mark(&mut emit, cursor, SPACING_MARK);
        cursor += spacing;
        emit(cursor, 0.0);
        mark(&mut emit, cursor, BOX_MARK);

        let left = cursor + glyph.start_offset * scale;
        for p in &glyph.path {
            emit(left + p.x * scale, p.y * scale);
        }
        if let Some(last) = glyph.path.last() {
            let end = left + last.x * scale;
            if last.y != 0.0 {
                emit(end, 0.0);
            }
            mark(&mut emit, end, OUTLINE_MARK);
        }

        cursor += glyph.width * scale;
        emit(cursor, 0.0);
        mark(&mut emit, cursor, BOX_MARK);
        cursor += spacing;
        emit(cursor, 0.0);
        mark(&mut emit, cursor, SPACING_MARK);
    }

    Ok(())
}
