//! Theta-rho (`.thr`) track files
//!
//! One record per line, `theta rho`, where theta is an unwrapped polar angle
//! in radians and rho is the distance from the centre normalised to `[0, 1]`.
//! Theta is cumulative: it keeps counting past ±2π so the table knows which
//! way the arm travelled between records.

use sandskrit_core::{wrap_angle, ExportError, ExportResult, Point};
use sandskrit_settings::ThrSettings;
use std::fmt::Write;
use tracing::warn;

/// Points closer than this to the centre have no meaningful angle.
const CENTRE_EPSILON: f64 = 1e-9;

/// One theta-rho record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarPoint {
    pub theta: f64,
    pub rho: f64,
}

impl PolarPoint {
    pub fn new(theta: f64, rho: f64) -> Self {
        Self { theta, rho }
    }

    /// Converts back to table coordinates, `rho_scale` being the radius
    /// that maps to `rho = 1`.
    pub fn to_cartesian(&self, rho_scale: f64) -> Point {
        Point::from_polar(self.rho * rho_scale, self.theta)
    }
}

/// Cumulative polar angle of every point.
///
/// Each step adds the shortest signed rotation from the previous angle, so
/// consecutive values never jump by more than π. Points at the centre repeat
/// the previous value.
pub fn unwrap_thetas(points: &[Point]) -> Vec<f64> {
    let mut thetas = Vec::with_capacity(points.len());
    let mut total = 0.0;
    let mut previous = 0.0;

    for p in points {
        if p.radius() > CENTRE_EPSILON {
            let angle = p.angle();
            total += wrap_angle(angle - previous);
            previous = angle;
        }
        thetas.push(total);
    }
    thetas
}

/// Writes paths as THR text.
#[derive(Debug, Clone, Default)]
pub struct ThrExporter {
    settings: ThrSettings,
}

impl ThrExporter {
    pub fn new(settings: ThrSettings) -> Self {
        Self { settings }
    }

    /// Converts points to theta-rho records. Rho values outside `[0, 1]`
    /// are clamped and reported once.
    pub fn polar_points(&self, points: &[Point], rho_scale: f64) -> ExportResult<Vec<PolarPoint>> {
        if !rho_scale.is_finite() || rho_scale <= 0.0 {
            return Err(ExportError::InvalidParameter {
                name: "rho_scale".to_string(),
                reason: format!("must be a positive radius, got {rho_scale}"),
            });
        }

        let thetas = unwrap_thetas(points);
        let mut clamped = 0usize;
        let records = points
            .iter()
            .zip(thetas)
            .map(|(p, theta)| {
                let rho = p.radius() / rho_scale;
                if rho > 1.0 {
                    clamped += 1;
                }
                PolarPoint::new(theta, rho.clamp(0.0, 1.0))
            })
            .collect();

        if clamped > 0 {
            warn!(
                "{} point(s) lie beyond radius {:.3}; rho clamped to 1",
                clamped, rho_scale
            );
        }
        Ok(records)
    }

    /// Renders the full THR document.
    pub fn render(&self, points: &[Point], rho_scale: f64) -> ExportResult<String> {
        if points.is_empty() {
            return Err(ExportError::EmptyPath);
        }

        let precision = self.settings.precision;
        let records = self.polar_points(points, rho_scale)?;
        let mut out = String::with_capacity(records.len() * (2 * precision + 8));
        for r in &records {
            // Writing to a String cannot fail
            let _ = writeln!(out, "{:.*} {:.*}", precision, r.theta, precision, r.rho);
        }
        Ok(out)
    }
}

/// Parses THR text. Blank lines and `#` comments are skipped.
pub fn parse_thr(text: &str) -> ExportResult<Vec<PolarPoint>> {
    let mut records = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let malformed = |reason: String| ExportError::MalformedRecord {
            line_number: index + 1,
            reason,
        };

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 2 {
            return Err(malformed(format!(
                "expected 2 values, found {}",
                fields.len()
            )));
        }

        let parse = |field: &str| -> ExportResult<f64> {
            let value: f64 = field
                .parse()
                .map_err(|_| malformed(format!("'{field}' is not a number")))?;
            if value.is_finite() {
                Ok(value)
            } else {
                Err(malformed(format!("'{field}' is not finite")))
            }
        };

        records.push(PolarPoint::new(parse(fields[0])?, parse(fields[1])?));
    }

    Ok(records)
}
