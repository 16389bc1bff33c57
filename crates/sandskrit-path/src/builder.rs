//! The path builder.
//!
//! A [`PathBuilder`] owns one continuous polyline. Every operation starts at
//! the pen (the last point), stages its geometry, checks it, and appends it
//! in one go. Failed operations leave the path exactly as it was.

use std::f64::consts::TAU;
use std::fmt;
use std::path::Path;

use sandskrit_core::{forward_sweep, normalize_degrees, ExportResult, PathError, PathResult, Point};
use sandskrit_export::{write_file, SvgExporter, ThrExporter};
use sandskrit_glyphs::{GlyphProvider, GlyphTable};
use sandskrit_settings::{Config, PathSettings, SvgSettings, TextSettings, ThrSettings};
use tracing::{debug, warn};

use crate::lines::{self, LineConfig};
use crate::spiral;
use crate::stroke::{Sampling, Stroke};
use crate::text::{self, TextFrame, TextMetrics, TextStyle};

/// Builds a single continuous path for a sand table.
///
/// Coordinates are table units with the origin at the table centre and the
/// y axis up. Angles taken by the public API are in degrees.
pub struct PathBuilder<'g> {
    points: Vec<Point>,
    boundary_radius: Option<f64>,
    glyphs: &'g dyn GlyphProvider,
    path: PathSettings,
    text: TextSettings,
    svg: SvgSettings,
    thr: ThrSettings,
}

impl PathBuilder<'static> {
    /// Starts a path at `(x, y)` using the bundled glyph table.
    pub fn new(x: f64, y: f64) -> Self {
        PathBuilder::with_glyphs(x, y, GlyphTable::builtin())
    }
}

impl<'g> PathBuilder<'g> {
    /// Starts a path at `(x, y)` drawing text with `glyphs`.
    pub fn with_glyphs(x: f64, y: f64, glyphs: &'g dyn GlyphProvider) -> Self {
        Self {
            points: vec![Point::new(x, y)],
            boundary_radius: None,
            glyphs,
            path: PathSettings::default(),
            text: TextSettings::default(),
            svg: SvgSettings::default(),
            thr: ThrSettings::default(),
        }
    }

    pub fn with_settings(mut self, path: PathSettings, text: TextSettings) -> Self {
        self.path = path;
        self.text = text;
        self
    }

    /// Applies every section of a loaded configuration.
    pub fn with_config(mut self, config: &Config) -> Self {
        self.path = config.path.clone();
        self.text = config.text.clone();
        self.svg = config.svg.clone();
        self.thr = config.thr.clone();
        self
    }

    /// Sets the boundary up front. An invalid radius is logged and ignored;
    /// use [`set_boundary_radius`](Self::set_boundary_radius) to get an error.
    pub fn with_boundary_radius(mut self, radius: f64) -> Self {
        if let Err(e) = self.set_boundary_radius(radius) {
            warn!("Ignoring boundary, no boundary checks will apply: {}", e);
        }
        self
    }

    pub fn set_boundary_radius(&mut self, radius: f64) -> PathResult<()> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(PathError::invalid_argument(
                "boundary_radius",
                format!("must be positive, got {radius}"),
            ));
        }
        self.boundary_radius = Some(radius);
        Ok(())
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false: a path holds at least its starting point.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The pen position.
    pub fn current_point(&self) -> Point {
        // `points` is seeded in the constructor and never shrinks
        self.points[self.points.len() - 1]
    }

    pub fn current_radius(&self) -> f64 {
        self.current_point().radius()
    }

    /// Pen angle in radians, `(-π, π]`.
    pub fn current_angle(&self) -> f64 {
        self.current_point().angle()
    }

    pub fn boundary_radius(&self) -> Option<f64> {
        self.boundary_radius
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// Archimedean spiral from the pen radius to `radius`, turning `turns`
    /// full revolutions plus whatever it takes to finish at `ending_angle`
    /// degrees. Raises the boundary to `radius`.
    pub fn add_spiral_out(&mut self, radius: f64, turns: f64, ending_angle: f64) -> PathResult<()> {
        require_positive("radius", radius)?;
        require_turns(turns)?;
        if !ending_angle.is_finite() || !(0.0..360.0).contains(&ending_angle) {
            return Err(PathError::invalid_argument(
                "ending_angle",
                format!("must be in [0, 360), got {ending_angle}"),
            ));
        }

        let pen = self.current_point();
        let r0 = pen.radius();
        let start_angle = pen.angle();
        let total = turns * TAU + forward_sweep(start_angle, ending_angle.to_radians());

        debug!(
            "Spiral out from r={:.3} to r={:.3}, {} turns, ending at {}°",
            r0, radius, turns, ending_angle
        );

        let mut stroke = self.stroke()?;
        if total <= f64::EPSILON {
            stroke.line_to(Point::from_polar(radius, start_angle));
        } else {
            spiral::sweep(&mut stroke, start_angle, total, r0, radius);
        }

        self.commit(stroke);
        self.boundary_radius = Some(self.boundary_radius.unwrap_or(0.0).max(radius));
        Ok(())
    }

    /// Archimedean spiral from the pen to the centre over `turns` revolutions,
    /// counter-clockwise. Zero turns moves straight in.
    pub fn add_spiral_in(&mut self, turns: f64) -> PathResult<()> {
        require_turns(turns)?;

        let pen = self.current_point();
        let r0 = pen.radius();
        debug!("Spiral in from r={:.3}, {} turns", r0, turns);

        let mut stroke = self.stroke()?;
        if turns <= f64::EPSILON {
            stroke.line_to(Point::ORIGIN);
        } else {
            spiral::sweep(&mut stroke, pen.angle(), turns * TAU, r0, 0.0);
        }

        self.commit(stroke);
        Ok(())
    }

    /// Circles at the pen radius for `turns` revolutions plus the rotation to
    /// `ending_angle` degrees. A pen at the centre draws nothing.
    pub fn add_outer_loop(&mut self, turns: f64, ending_angle: f64) -> PathResult<()> {
        require_turns(turns)?;
        if !ending_angle.is_finite() {
            return Err(PathError::invalid_argument(
                "ending_angle",
                format!("must be finite, got {ending_angle}"),
            ));
        }

        let pen = self.current_point();
        let radius = pen.radius();
        if let Some(boundary) = self.boundary_radius {
            if radius > boundary + self.text.boundary_tolerance {
                return Err(PathError::BoundaryExceeded { radius, boundary });
            }
        }

        let mut stroke = self.stroke()?;
        if radius <= stroke.sampling().epsilon {
            debug!("Outer loop skipped, pen is at the centre");
            return Ok(());
        }

        let start_angle = pen.angle();
        let target = normalize_degrees(ending_angle).to_radians();
        let total = turns * TAU + forward_sweep(start_angle, target);
        debug!("Outer loop at r={:.3}, {} turns, ending at {}°", radius, turns, ending_angle);

        if total > f64::EPSILON {
            spiral::sweep(&mut stroke, start_angle, total, radius, radius);
        }
        self.commit(stroke);
        Ok(())
    }

    /// Straight line of `length` in direction `angle` degrees. A negative
    /// length draws in the opposite direction.
    pub fn add_line(&mut self, length: f64, angle: f64) -> PathResult<()> {
        require_finite("length", length)?;
        require_finite("angle", angle)?;
        let target = self.current_point() + Point::from_polar(length, angle.to_radians());
        self.line_to(target)
    }

    /// Straight line from the pen to `target`.
    pub fn line_to(&mut self, target: Point) -> PathResult<()> {
        if !target.is_finite() {
            return Err(PathError::invalid_argument(
                "target",
                format!("must be finite, got ({}, {})", target.x, target.y),
            ));
        }
        debug!("Line to ({:.3}, {:.3})", target.x, target.y);

        let mut stroke = self.stroke()?;
        stroke.line_to(target);
        self.check_boundary(&stroke)?;
        self.commit(stroke);
        Ok(())
    }

    /// Writes `text` starting at the pen, baseline tangent to the pen's
    /// circle and letters leaning toward the centre.
    pub fn add_string(&mut self, text: &str, scale: f64) -> PathResult<()> {
        self.add_string_offset(text, scale, Point::ORIGIN)
    }

    /// Like [`add_string`](Self::add_string) with the baseline start moved by
    /// `offset` in the text frame (`x` along the baseline, `y` toward the
    /// top of the letters). The pen draws the move.
    pub fn add_string_offset(&mut self, text: &str, scale: f64, offset: Point) -> PathResult<()> {
        require_positive("scale", scale)?;
        if !offset.is_finite() {
            return Err(PathError::invalid_argument("offset", "must be finite"));
        }
        debug!("String {:?} at scale {}", text, scale);

        let mut stroke = self.stroke()?;
        let epsilon = stroke.sampling().epsilon;
        let frame = TextFrame::facing_centre(self.current_point(), epsilon).shifted(offset);
        text::layout(&mut stroke, self.glyphs, text, scale, self.text_style(), &frame)?;

        self.check_boundary(&stroke)?;
        self.commit(stroke);
        Ok(())
    }

    /// Width and vertical extent `text` would have at `scale`.
    pub fn text_metrics(&self, text: &str, scale: f64) -> PathResult<TextMetrics> {
        require_positive("scale", scale)?;
        text::measure(self.glyphs, text, scale, self.text_style())
    }

    /// Writes a block of horizontal lines centred on the table.
    ///
    /// `line_spacing` multiplies each line's scale to give its slot height.
    /// The block must fit inside the boundary, or inside the pen's circle
    /// when no boundary is set. All lines are appended or none are.
    pub fn add_lines_of_text(&mut self, lines: &[LineConfig], line_spacing: f64) -> PathResult<()> {
        if lines.is_empty() {
            return Ok(());
        }

        let mut stroke = self.stroke()?;
        let radius = self.boundary_radius.unwrap_or_else(|| self.current_radius());
        if radius <= stroke.sampling().epsilon {
            return Err(PathError::invalid_argument(
                "boundary_radius",
                "no boundary is set and the pen is at the centre",
            ));
        }
        debug!("{} lines of text inside r={:.3}", lines.len(), radius);

        lines::stage_block(
            &mut stroke,
            self.glyphs,
            lines,
            line_spacing,
            radius,
            self.text_style(),
        )?;

        let reached = stroke.max_radius();
        if reached > radius + self.text.boundary_tolerance {
            return Err(PathError::BoundaryExceeded {
                radius: reached,
                boundary: radius,
            });
        }

        self.commit(stroke);
        Ok(())
    }

    /// Radius that maps to the edge of exports: the boundary, else the
    /// farthest point, else 1.
    pub fn normalization_radius(&self) -> f64 {
        self.boundary_radius.unwrap_or_else(|| {
            let max = self.points.iter().map(Point::radius).fold(0.0, f64::max);
            if max > 0.0 {
                max
            } else {
                1.0
            }
        })
    }

    /// SVG preview on a `size` by `size` canvas.
    pub fn to_svg(&self, size: u32) -> ExportResult<String> {
        SvgExporter::new(self.svg.clone())
            .with_size(size)
            .render(&self.points, self.normalization_radius())
    }

    /// THR text, rho normalized by the boundary.
    pub fn to_thr(&self) -> ExportResult<String> {
        ThrExporter::new(self.thr.clone()).render(&self.points, self.normalization_radius())
    }

    pub fn save_svg(&self, path: &Path, size: u32) -> ExportResult<()> {
        write_file(path, &self.to_svg(size)?)
    }

    pub fn save_thr(&self, path: &Path) -> ExportResult<()> {
        write_file(path, &self.to_thr()?)
    }

    fn stroke(&self) -> PathResult<Stroke> {
        Ok(Stroke::new(self.current_point(), Sampling::from_settings(&self.path)?))
    }

    fn text_style(&self) -> TextStyle {
        TextStyle {
            character_spacing: self.text.character_spacing,
            space_width: self.text.space_width,
            debug_marks: false,
        }
    }

    fn check_boundary(&self, stroke: &Stroke) -> PathResult<()> {
        if let Some(boundary) = self.boundary_radius {
            let reached = stroke.max_radius();
            if reached > boundary + self.text.boundary_tolerance {
                return Err(PathError::BoundaryExceeded {
                    radius: reached,
                    boundary,
                });
            }
        }
        Ok(())
    }

    fn commit(&mut self, stroke: Stroke) {
        let added = stroke.len();
        self.points.extend(stroke.into_points());
        debug!("Appended {} points, path has {}", added, self.points.len());
    }
}

impl fmt::Debug for PathBuilder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathBuilder")
            .field("points", &self.points.len())
            .field("current_point", &self.current_point())
            .field("boundary_radius", &self.boundary_radius)
            .finish_non_exhaustive()
    }
}

fn require_finite(name: &str, value: f64) -> PathResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(PathError::invalid_argument(name, format!("must be finite, got {value}")))
    }
}

fn require_positive(name: &str, value: f64) -> PathResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(PathError::invalid_argument(name, format!("must be positive, got {value}")))
    }
}

fn require_turns(turns: f64) -> PathResult<()> {
    if turns.is_finite() && turns >= 0.0 {
        Ok(())
    } else {
        Err(PathError::invalid_argument("turns", format!("must be >= 0, got {turns}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_builder_state() {
        let builder = PathBuilder::new(3.0, 4.0);
        assert_eq!(builder.len(), 1);
        assert!(!builder.is_empty());
        assert_eq!(builder.current_point(), Point::new(3.0, 4.0));
        assert!((builder.current_radius() - 5.0).abs() < 1e-12);
        assert_eq!(builder.boundary_radius(), None);
    }

    #[test]
    fn test_set_boundary_rejects_non_positive() {
        let mut builder = PathBuilder::new(0.0, 0.0);
        assert!(builder.set_boundary_radius(0.0).is_err());
        assert!(builder.set_boundary_radius(f64::INFINITY).is_err());
        builder.set_boundary_radius(25.0).unwrap();
        assert_eq!(builder.boundary_radius(), Some(25.0));

        let builder = PathBuilder::new(0.0, 0.0).with_boundary_radius(-1.0);
        assert_eq!(builder.boundary_radius(), None);
    }

    #[test]
    fn test_zero_turn_spiral_is_radial() {
        let mut builder = PathBuilder::new(0.0, 0.0);
        builder.add_spiral_out(5.0, 0.0, 0.0).unwrap();
        assert_eq!(builder.len(), 6);
        assert!(builder.points().iter().all(|p| p.y == 0.0));
        assert_eq!(builder.boundary_radius(), Some(5.0));
    }

    #[test]
    fn test_spiral_out_keeps_larger_boundary() {
        let mut builder = PathBuilder::new(0.0, 0.0);
        builder.add_spiral_out(50.0, 1.0, 0.0).unwrap();
        builder.add_spiral_out(20.0, 1.0, 0.0).unwrap();
        assert_eq!(builder.boundary_radius(), Some(50.0));
        assert!((builder.current_radius() - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_add_line_negative_length() {
        let mut builder = PathBuilder::new(0.0, 0.0);
        builder.add_line(-3.0, 0.0).unwrap();
        assert!(builder.current_point().approx_eq(&Point::new(-3.0, 0.0), 1e-12));
        assert_eq!(builder.len(), 4);
    }

    #[test]
    fn test_line_respects_boundary() {
        let mut builder = PathBuilder::new(0.0, 0.0).with_boundary_radius(5.0);
        let err = builder.add_line(6.0, 45.0).unwrap_err();
        assert!(err.is_boundary_error());
        assert_eq!(builder.len(), 1);
    }

    #[test]
    fn test_invalid_settings_are_reported() {
        let path = PathSettings {
            angular_step_degrees: 0.0,
            ..PathSettings::default()
        };
        let mut builder = PathBuilder::new(1.0, 0.0).with_settings(path, TextSettings::default());
        assert!(matches!(
            builder.add_outer_loop(1.0, 0.0),
            Err(PathError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_normalization_radius_fallbacks() {
        let builder = PathBuilder::new(0.0, 0.0);
        assert_eq!(builder.normalization_radius(), 1.0);

        let mut builder = PathBuilder::new(0.0, 0.0);
        builder.add_line(4.0, 90.0).unwrap();
        assert!((builder.normalization_radius() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_debug_output() {
        let builder = PathBuilder::new(0.0, 0.0);
        let text = format!("{builder:?}");
        assert!(text.starts_with("PathBuilder"));
        assert!(text.contains("points: 1"));
    }
}
