//! Table-relative geometry.
//!
//! All coordinates are Cartesian with the origin at the table centre and the
//! y axis pointing up. Angles are radians unless a name says otherwise.

use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};
use std::ops::{Add, Mul, Neg, Sub};

/// A 2D point (or vector) relative to the table centre.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// The table centre.
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Builds a point from a radius and a polar angle in radians.
    pub fn from_polar(radius: f64, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            x: radius * cos,
            y: radius * sin,
        }
    }

    /// Distance from the table centre.
    pub fn radius(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Polar angle in `(-π, π]`. The centre reports 0.
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// True when both coordinates are within `epsilon` of `other`.
    pub fn approx_eq(&self, other: &Point, epsilon: f64) -> bool {
        (self.x - other.x).abs() <= epsilon && (self.y - other.y).abs() <= epsilon
    }

    /// Linear interpolation, `t = 0` is `self` and `t = 1` is `other`.
    pub fn lerp(&self, other: &Point, t: f64) -> Point {
        Point {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }

    /// Unit vector in the same direction, or `None` for a zero-length vector.
    pub fn normalized(&self) -> Option<Point> {
        let len = self.radius();
        if len <= f64::EPSILON {
            return None;
        }
        Some(Point::new(self.x / len, self.y / len))
    }

    /// Rotates the vector 90 degrees clockwise.
    pub fn perp_cw(&self) -> Point {
        Point::new(self.y, -self.x)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

/// Maps any angle in degrees into `[0, 360)`.
pub fn normalize_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Sweeps this close to a full turn are float noise around a zero rotation.
const FULL_TURN_TOLERANCE: f64 = 1e-9;

/// Shortest counter-clockwise rotation from `from` to `to`, in `[0, 2π)`.
///
/// Angles that agree up to rounding give 0, whichever side of `to` the
/// noise puts `from`.
pub fn forward_sweep(from: f64, to: f64) -> f64 {
    let sweep = (to - from).rem_euclid(TAU);
    if TAU - sweep < FULL_TURN_TOLERANCE {
        0.0
    } else {
        sweep
    }
}

/// Wraps an angle delta into `(-π, π]`.
pub fn wrap_angle(delta: f64) -> f64 {
    let mut wrapped = delta.rem_euclid(TAU);
    if wrapped > PI {
        wrapped -= TAU;
    }
    wrapped
}
