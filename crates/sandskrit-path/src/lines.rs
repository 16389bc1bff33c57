//! Multi-line text blocks centred on the table.
//!
//! Lines are stacked top to bottom in slots of `scale * line_spacing`, the
//! whole block centred on the table origin. Each line sits on a horizontal
//! chord of the drawable circle. The pen reaches a line by riding the circle
//! counter-clockwise to the chord's left end, runs along the chord into the
//! text, and leaves along the chord to its right end.

use crate::spiral;
use crate::stroke::Stroke;
use crate::text::{self, TextFrame, TextStyle};
use sandskrit_core::{forward_sweep, PathError, PathResult, Point};
use sandskrit_glyphs::GlyphProvider;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One line of a text block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineConfig {
    pub text: String,
    pub scale: f64,
    /// Per-line override of the configured character spacing, in glyph units.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character_spacing: Option<f64>,
    /// Draws spacing ticks around every glyph of this line.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub debug: bool,
}

impl LineConfig {
    pub fn new(text: impl Into<String>, scale: f64) -> Self {
        Self {
            text: text.into(),
            scale,
            character_spacing: None,
            debug: false,
        }
    }

    pub fn with_character_spacing(mut self, spacing: f64) -> Self {
        self.character_spacing = Some(spacing);
        self
    }

    pub fn with_debug_marks(mut self) -> Self {
        self.debug = true;
        self
    }

    fn validate(&self, index: usize) -> PathResult<()> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(PathError::invalid_argument(
                format!("lines[{index}].scale"),
                format!("must be positive, got {}", self.scale),
            ));
        }
        if let Some(spacing) = self.character_spacing {
            if !spacing.is_finite() || spacing < 0.0 {
                return Err(PathError::invalid_argument(
                    format!("lines[{index}].character_spacing"),
                    format!("must be non-negative, got {spacing}"),
                ));
            }
        }
        Ok(())
    }
}

/// Vertical placement of one line, world y-up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct LineSlot {
    pub baseline: f64,
}

/// Baselines for every line, first line at the top.
pub(crate) fn plan_baselines(
    lines: &[LineConfig],
    line_spacing: f64,
    cap_height: f64,
) -> Vec<LineSlot> {
    let total: f64 = lines.iter().map(|l| l.scale * line_spacing).sum();
    let mut slot_top = total / 2.0;

    lines
        .iter()
        .map(|line| {
            let height = line.scale * line_spacing;
            let centre = slot_top - height / 2.0;
            slot_top -= height;
            // Cap box centred in the slot; y-up, so the baseline is below it
            LineSlot {
                baseline: centre - cap_height * line.scale / 2.0,
            }
        })
        .collect()
}

/// Stages a whole block into `stroke`. `radius` is the drawable circle.
pub(crate) fn stage_block(
    stroke: &mut Stroke,
    glyphs: &dyn GlyphProvider,
    lines: &[LineConfig],
    line_spacing: f64,
    radius: f64,
    style: TextStyle,
) -> PathResult<()> {
    if !line_spacing.is_finite() || line_spacing <= 0.0 {
        return Err(PathError::invalid_argument(
            "line_spacing",
            format!("must be positive, got {line_spacing}"),
        ));
    }
    for (index, line) in lines.iter().enumerate() {
        line.validate(index)?;
    }

    let epsilon = stroke.sampling().epsilon;
    let slots = plan_baselines(lines, line_spacing, glyphs.cap_height());

    for (line, slot) in lines.iter().zip(slots) {
        let b = slot.baseline;
        if b.abs() >= radius {
            return Err(PathError::BoundaryExceeded {
                radius: b.abs(),
                boundary: radius,
            });
        }

        let style = TextStyle {
            character_spacing: line.character_spacing.unwrap_or(style.character_spacing),
            ..style
        }
        .with_debug_marks(line.debug);
        let metrics = text::measure(glyphs, &line.text, line.scale, style)?;
        let half_chord = (radius * radius - b * b).sqrt();
        let chord_left = Point::new(-half_chord, b);
        let chord_right = Point::new(half_chord, b);

        debug!(
            "Line {:?} at baseline {:.3}, width {:.3} on chord {:.3}",
            line.text,
            b,
            metrics.width,
            2.0 * half_chord
        );

        // Radially onto the circle, then around it to the chord
        let pen = stroke.cursor();
        let on_circle = if pen.radius() <= epsilon {
            Point::from_polar(radius, 0.0)
        } else {
            Point::from_polar(radius, pen.angle())
        };
        stroke.line_to(on_circle);

        let start_angle = on_circle.angle();
        let arc = forward_sweep(start_angle, chord_left.angle());
        if arc > 0.0 {
            spiral::sweep(stroke, start_angle, arc, radius, radius);
        }
        stroke.line_to(chord_left);

        let frame = TextFrame::horizontal(Point::new(-metrics.width / 2.0, b));
        text::layout(stroke, glyphs, &line.text, line.scale, style, &frame)?;
        stroke.line_to(chord_right);
    }

    Ok(())
}
