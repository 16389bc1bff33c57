use sandskrit_core::{PathError, Point};
use sandskrit_glyphs::{Glyph, GlyphTable};
use sandskrit_path::PathBuilder;
use sandskrit_settings::{PathSettings, TextSettings};

fn bar_table() -> GlyphTable {
    let mut table = GlyphTable::new();
    table
        .insert(
            '|',
            Glyph::new(
                vec![Point::new(0.0, 0.0), Point::new(0.0, -1.0), Point::new(0.0, 0.0)],
                0.2,
                0.0,
            ),
        )
        .unwrap();
    table
}

#[test]
fn test_text_beyond_boundary_is_rejected() {
    let mut builder = PathBuilder::new(0.0, 0.0);
    builder.set_boundary_radius(10.0).unwrap();
    let before = builder.len();

    let err = builder
        .add_string("HELLO WORLD THIS TEXT IS TOO LONG", 50.0)
        .unwrap_err();
    assert!(err.is_boundary_error());
    assert_eq!(builder.len(), before);
}

#[test]
fn test_unknown_character_leaves_path_unchanged() {
    let mut builder = PathBuilder::new(0.0, -40.0);
    let before = builder.points().to_vec();

    let err = builder.add_string("HELLO™", 10.0).unwrap_err();
    assert_eq!(err, PathError::UnknownCharacter('™'));
    assert_eq!(builder.points(), before.as_slice());
}

#[test]
fn test_text_at_bottom_reads_left_to_right() {
    let mut builder = PathBuilder::new(0.0, -40.0);
    builder.add_string("HI", 5.0).unwrap();

    let metrics = builder.text_metrics("HI", 5.0).unwrap();
    let end = builder.current_point();
    assert!(end.approx_eq(&Point::new(metrics.width, -40.0), 1e-9));

    // Letters rise toward the centre
    let top = builder.points().iter().map(|p| p.y).fold(f64::MIN, f64::max);
    assert!((top - (-40.0 + 5.0)).abs() < 0.3);
}

#[test]
fn test_text_on_the_right_runs_upward() {
    let mut builder = PathBuilder::new(40.0, 0.0);
    builder.add_string("II", 2.0).unwrap();

    let end = builder.current_point();
    assert!((end.x - 40.0).abs() < 1e-9);
    assert!(end.y > 0.0);
    // Nothing pokes outside the pen's circle side of the baseline
    assert!(builder.points().iter().all(|p| p.x <= 40.0 + 1e-9));
}

#[test]
fn test_text_offset_is_drawn() {
    let mut builder = PathBuilder::new(0.0, -40.0);
    builder
        .add_string_offset("I", 2.0, Point::new(-3.0, 2.0))
        .unwrap();
    let points = builder.points();
    // The move to the offset origin is part of the path
    assert!(points.iter().any(|p| p.approx_eq(&Point::new(-3.0, -38.0), 1e-9)));
    for pair in points.windows(2) {
        assert!(pair[0].distance_to(&pair[1]) <= 1.0 + 1e-6);
    }
}

#[test]
fn test_text_metrics() {
    let table = bar_table();
    let builder = PathBuilder::with_glyphs(0.0, 0.0, &table);
    let metrics = builder.text_metrics("|| |", 10.0).unwrap();
    // Three glyphs of 0.2 + 2 * 0.1, one space of 0.5
    assert!((metrics.width - 17.0).abs() < 1e-9);
    assert_eq!(metrics.min_y, -10.0);
    assert_eq!(metrics.max_y, 0.0);

    assert!(matches!(
        builder.text_metrics("x", 1.0),
        Err(PathError::UnknownCharacter('x'))
    ));
    assert!(builder.text_metrics("|", 0.0).is_err());
}

#[test]
fn test_custom_glyphs_and_spacing() {
    let table = bar_table();
    let text = TextSettings {
        character_spacing: 0.0,
        ..TextSettings::default()
    };
    let mut builder =
        PathBuilder::with_glyphs(0.0, 0.0, &table).with_settings(PathSettings::default(), text);
    builder.add_string("||", 1.0).unwrap();

    // Unrotated frame at the centre: bars go up +y and the pen ends at 0.4
    let points = builder.points();
    assert!(points.contains(&Point::new(0.0, 1.0)));
    assert!(points.contains(&Point::new(0.2, 1.0)));
    assert!(builder.current_point().approx_eq(&Point::new(0.4, 0.0), 1e-12));
}

#[test]
fn test_text_without_boundary_is_unchecked() {
    let mut builder = PathBuilder::new(0.0, -5.0);
    builder.add_string("WIDE", 20.0).unwrap();
    assert!(builder.current_radius() > 5.0);
}

#[test]
fn test_invalid_scale() {
    let mut builder = PathBuilder::new(0.0, 0.0);
    assert!(matches!(
        builder.add_string("A", -1.0),
        Err(PathError::InvalidArgument { .. })
    ));
    assert_eq!(builder.len(), 1);
}
