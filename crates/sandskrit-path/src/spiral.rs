//! Polar sweeps: Archimedean spirals and constant-radius loops.

use crate::stroke::{pieces_for, Stroke};
use sandskrit_core::Point;

/// Sweeps counter-clockwise from `start_angle` through `sweep` radians while
/// the radius moves linearly from `r0` to `r1`.
///
/// The step count honours both the angular step and the maximum segment
/// length for the radial component, so a fast-growing spiral still gets
/// short chords. The zeroth sample is the cursor itself and is skipped.
pub(crate) fn sweep(stroke: &mut Stroke, start_angle: f64, sweep: f64, r0: f64, r1: f64) {
    let sampling = stroke.sampling();
    let steps = pieces_for(sweep, sampling.step)
        .max(pieces_for((r1 - r0).abs(), sampling.max_segment));

    for i in 1..=steps {
        let t = i as f64 / steps as f64;
        let theta = start_angle + sweep * t;
        let r = r0 + (r1 - r0) * t;
        stroke.push(Point::from_polar(r, theta));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stroke::Sampling;
    use sandskrit_settings::PathSettings;
    use std::f64::consts::{FRAC_PI_2, TAU};

    fn stroke_at(start: Point) -> Stroke {
        Stroke::new(start, Sampling::from_settings(&PathSettings::default()).unwrap())
    }

    #[test]
    fn test_quarter_loop_has_one_point_per_degree() {
        let mut stroke = stroke_at(Point::new(10.0, 0.0));
        sweep(&mut stroke, 0.0, FRAC_PI_2, 10.0, 10.0);
        assert_eq!(stroke.len(), 90);
        assert!(stroke.cursor().approx_eq(&Point::new(0.0, 10.0), 1e-9));
    }

    #[test]
    fn test_radial_growth_adds_steps() {
        let mut stroke = stroke_at(Point::ORIGIN);
        sweep(&mut stroke, 0.0, 10f64.to_radians(), 0.0, 50.0);
        assert_eq!(stroke.len(), 50);
        let points = stroke.into_points();
        assert!((points[49].radius() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_full_turn_returns_to_start() {
        let mut stroke = stroke_at(Point::new(0.0, 5.0));
        sweep(&mut stroke, FRAC_PI_2, TAU, 5.0, 5.0);
        assert_eq!(stroke.len(), 360);
        assert!(stroke.cursor().approx_eq(&Point::new(0.0, 5.0), 1e-9));
    }
}
