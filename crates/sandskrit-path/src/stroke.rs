//! Staging buffer for a single append operation.
//!
//! Operations draw into a [`Stroke`] that starts at the pen, validate the
//! staged points, and only then hand them to the builder. A failed operation
//! drops its stroke and the path is untouched.

use sandskrit_core::{PathError, PathResult, Point};
use sandskrit_settings::PathSettings;

/// Validated sampling parameters.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Sampling {
    /// Angular step in radians.
    pub step: f64,
    pub max_segment: f64,
    pub epsilon: f64,
}

impl Sampling {
    pub(crate) fn from_settings(settings: &PathSettings) -> PathResult<Self> {
        let step = settings.angular_step_degrees;
        if !step.is_finite() || step <= 0.0 {
            return Err(PathError::invalid_argument(
                "angular_step_degrees",
                format!("must be positive, got {step}"),
            ));
        }
        let max_segment = settings.max_segment_length;
        if !max_segment.is_finite() || max_segment <= 0.0 {
            return Err(PathError::invalid_argument(
                "max_segment_length",
                format!("must be positive, got {max_segment}"),
            ));
        }
        let epsilon = settings.point_epsilon;
        if !epsilon.is_finite() || epsilon < 0.0 {
            return Err(PathError::invalid_argument(
                "point_epsilon",
                format!("must be non-negative, got {epsilon}"),
            ));
        }

        Ok(Self {
            step: step.to_radians(),
            max_segment,
            epsilon,
        })
    }
}

/// Points staged by one operation, continuing from `cursor`.
#[derive(Debug, Clone)]
pub(crate) struct Stroke {
    points: Vec<Point>,
    cursor: Point,
    sampling: Sampling,
}

impl Stroke {
    pub(crate) fn new(start: Point, sampling: Sampling) -> Self {
        Self {
            points: Vec::new(),
            cursor: start,
            sampling,
        }
    }

    /// Last staged point, or the starting pen when nothing is staged.
    pub(crate) fn cursor(&self) -> Point {
        self.cursor
    }

    pub(crate) fn sampling(&self) -> Sampling {
        self.sampling
    }

    /// Appends a point unless it repeats the cursor.
    pub(crate) fn push(&mut self, point: Point) {
        if point.distance_to(&self.cursor) <= self.sampling.epsilon {
            return;
        }
        self.points.push(point);
        self.cursor = point;
    }

    /// Straight segment from the cursor, split so no piece exceeds the
    /// maximum segment length.
    pub(crate) fn line_to(&mut self, target: Point) {
        let from = self.cursor;
        let length = from.distance_to(&target);
        if length <= self.sampling.epsilon {
            return;
        }
        let pieces = pieces_for(length, self.sampling.max_segment);
        for i in 1..=pieces {
            let t = i as f64 / pieces as f64;
            self.push(from.lerp(&target, t));
        }
    }

    /// Largest radius among the staged points, 0 when nothing is staged.
    pub(crate) fn max_radius(&self) -> f64 {
        self.points.iter().map(Point::radius).fold(0.0, f64::max)
    }

    pub(crate) fn len(&self) -> usize {
        self.points.len()
    }

    pub(crate) fn into_points(self) -> Vec<Point> {
        self.points
    }
}

/// Number of equal pieces needed so each is at most `limit` long.
pub(crate) fn pieces_for(amount: f64, limit: f64) -> usize {
    // Shave float noise so exact multiples don't gain an extra piece
    ((amount / limit) - 1e-9).ceil().max(1.0) as usize
}
