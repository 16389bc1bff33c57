use proptest::prelude::*;
use sandskrit_path::{LineConfig, PathBuilder};

#[derive(Debug, Clone)]
enum Op {
    SpiralOut { radius: f64, turns: f64, ending: f64 },
    SpiralIn { turns: f64 },
    Loop { turns: f64, ending: f64 },
    Line { length: f64, angle: f64 },
    Text { text: &'static str, scale: f64 },
    Lines { scale: f64 },
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (1.0..120.0f64, 0.0..4.0f64, 0.0..359.0f64)
            .prop_map(|(radius, turns, ending)| Op::SpiralOut { radius, turns, ending }),
        (0.0..3.0f64).prop_map(|turns| Op::SpiralIn { turns }),
        (0.0..2.0f64, -720.0..720.0f64).prop_map(|(turns, ending)| Op::Loop { turns, ending }),
        (-30.0..30.0f64, -360.0..360.0f64).prop_map(|(length, angle)| Op::Line { length, angle }),
        (
            prop::sample::select(vec!["Sand", "a b", "42!", "xyz"]),
            0.5..8.0f64
        )
            .prop_map(|(text, scale)| Op::Text { text, scale }),
        (1.0..10.0f64).prop_map(|scale| Op::Lines { scale }),
    ]
}

fn apply(builder: &mut PathBuilder<'_>, op: &Op) {
    // Failures are fine here; only successful appends must stay connected
    let _ = match op {
        Op::SpiralOut { radius, turns, ending } => builder.add_spiral_out(*radius, *turns, *ending),
        Op::SpiralIn { turns } => builder.add_spiral_in(*turns),
        Op::Loop { turns, ending } => builder.add_outer_loop(*turns, *ending),
        Op::Line { length, angle } => builder.add_line(*length, *angle),
        Op::Text { text, scale } => builder.add_string(text, *scale),
        Op::Lines { scale } => builder.add_lines_of_text(&[LineConfig::new("ok", *scale)], 1.4),
    };
}

proptest! {
    #[test]
    fn prop_path_stays_connected(ops in prop::collection::vec(op(), 1..8)) {
        let mut builder = PathBuilder::new(0.0, 0.0);
        let step = 1f64.to_radians();

        for op in &ops {
            let before = builder.points().to_vec();
            apply(&mut builder, op);

            // Append-only: the old prefix is untouched
            prop_assert_eq!(&builder.points()[..before.len()], before.as_slice());
        }

        let reach = builder.points().iter().map(|p| p.radius()).fold(0.0, f64::max);
        for pair in builder.points().windows(2) {
            let gap = pair[0].distance_to(&pair[1]);
            prop_assert!(gap <= 1.0 + reach * step + 1e-6, "gap {} at reach {}", gap, reach);
            prop_assert!(gap > 0.0);
        }
    }
}
