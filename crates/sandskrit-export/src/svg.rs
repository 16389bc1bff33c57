//! SVG preview renderer
//!
//! Maps table coordinates onto a square canvas:
//! - table centre at the canvas centre
//! - uniform scale so the given extent (plus padding) fills the canvas
//! - y flipped so table "up" is screen "up"

use sandskrit_core::{ExportError, ExportResult, Point};
use sandskrit_settings::SvgSettings;
use std::fmt::Write;

/// Renders a path as a single-`<path>` SVG document.
#[derive(Debug, Clone, Default)]
pub struct SvgExporter {
    settings: SvgSettings,
}

impl SvgExporter {
    pub fn new(settings: SvgSettings) -> Self {
        Self { settings }
    }

    /// Overrides the canvas size.
    pub fn with_size(mut self, size: u32) -> Self {
        self.settings.size = size;
        self
    }

    pub fn size(&self) -> u32 {
        self.settings.size
    }

    /// Renders the full document. `extent` is the table radius that should
    /// reach the canvas edge (usually the boundary radius).
    pub fn render(&self, points: &[Point], extent: f64) -> ExportResult<String> {
        let d = self.path_data(points, extent)?;
        let size = self.settings.size;
        let s = &self.settings;

        let mut svg = String::new();
        svg.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {size} {size}\" width=\"{size}\" height=\"{size}\">\n"
        ));

        if s.draw_boundary {
            let half = size as f64 / 2.0;
            let r = half - s.padding;
            svg.push_str(&format!(
                "  <circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"none\" stroke=\"#cccccc\" stroke-width=\"{}\" />\n",
                self.num(half),
                self.num(half),
                self.num(r),
                self.num(s.stroke_width),
            ));
        }

        svg.push_str(&format!(
            "  <path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\" stroke-linejoin=\"round\" stroke-linecap=\"round\" />\n",
            d,
            escape_attr(&s.stroke),
            self.num(s.stroke_width),
        ));
        svg.push_str("</svg>\n");
        Ok(svg)
    }

    /// Builds the `d` attribute: one `M` followed by an `L` per point.
    pub fn path_data(&self, points: &[Point], extent: f64) -> ExportResult<String> {
        if points.is_empty() {
            return Err(ExportError::EmptyPath);
        }
        if !extent.is_finite() || extent <= 0.0 {
            return Err(ExportError::InvalidParameter {
                name: "extent".to_string(),
                reason: format!("must be a positive radius, got {extent}"),
            });
        }

        let half = self.settings.size as f64 / 2.0;
        let scale = (half - self.settings.padding) / extent;

        let mut d = String::with_capacity(points.len() * 16);
        for (i, p) in points.iter().enumerate() {
            let x = half + p.x * scale;
            let y = half - p.y * scale;
            if i > 0 {
                d.push(' ');
            }
            let cmd = if i == 0 { 'M' } else { 'L' };
            // Writing to a String cannot fail
            let _ = write!(d, "{} {} {}", cmd, self.num(x), self.num(y));
        }
        Ok(d)
    }

    fn num(&self, value: f64) -> String {
        format!("{:.*}", self.settings.precision, value)
    }
}

fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(0.0, 10.0),
        ]
    }

    #[test]
    fn test_origin_maps_to_canvas_centre() {
        let exporter = SvgExporter::default();
        let d = exporter.path_data(&square(), 10.0).unwrap();
        assert!(d.starts_with("M 100.000 100.000"));
    }

    #[test]
    fn test_y_axis_is_flipped() {
        let exporter = SvgExporter::new(SvgSettings {
            padding: 0.0,
            ..SvgSettings::default()
        });
        let d = exporter.path_data(&square(), 10.0).unwrap();
        assert_eq!(d, "M 100.000 100.000 L 200.000 100.000 L 100.000 0.000");
    }

    #[test]
    fn test_document_wrapper() {
        let exporter = SvgExporter::default().with_size(300);
        let svg = exporter.render(&square(), 10.0).unwrap();
        assert!(svg.starts_with(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 300 300\""
        ));
        assert_eq!(svg.matches("<path ").count(), 1);
        assert!(svg.contains("stroke=\"black\""));
        assert!(!svg.contains("<circle"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_boundary_circle() {
        let exporter = SvgExporter::new(SvgSettings {
            draw_boundary: true,
            ..SvgSettings::default()
        });
        let svg = exporter.render(&square(), 10.0).unwrap();
        assert!(svg.contains("<circle cx=\"100.000\" cy=\"100.000\" r=\"98.000\""));
    }

    #[test]
    fn test_empty_path_is_rejected() {
        let exporter = SvgExporter::default();
        assert!(matches!(
            exporter.render(&[], 1.0),
            Err(ExportError::EmptyPath)
        ));
    }

    #[test]
    fn test_invalid_extent_is_rejected() {
        let exporter = SvgExporter::default();
        assert!(matches!(
            exporter.render(&square(), 0.0),
            Err(ExportError::InvalidParameter { .. })
        ));
    }
}
