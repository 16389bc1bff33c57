use sandskrit::{parse_thr, Config, GlyphTable, LineConfig, Recipe, Step};

#[test]
fn test_sample_recipe_builds_and_saves() {
    let recipe = Recipe::sample();
    let builder = recipe
        .build(GlyphTable::builtin(), &Config::default())
        .unwrap();

    assert_eq!(builder.boundary_radius(), Some(100.0));
    assert!(builder
        .points()
        .iter()
        .all(|p| p.radius() <= 100.0 + 1e-3));

    let dir = tempfile::tempdir().unwrap();
    let svg = dir.path().join("sample.svg");
    let thr = dir.path().join("sample.thr");
    builder.save_svg(&svg, 300).unwrap();
    builder.save_thr(&thr).unwrap();

    let records = parse_thr(&std::fs::read_to_string(&thr).unwrap()).unwrap();
    assert_eq!(records.len(), builder.len());
    assert!(std::fs::read_to_string(&svg)
        .unwrap()
        .contains("viewBox=\"0 0 300 300\""));
}

#[test]
fn test_recipe_round_trip_json_and_toml() {
    let dir = tempfile::tempdir().unwrap();
    let recipe = Recipe {
        start: [0.0, 0.0],
        boundary_radius: Some(80.0),
        steps: vec![
            Step::SpiralOut {
                radius: 80.0,
                turns: 4.0,
                ending_angle: 270.0,
            },
            Step::Text {
                text: "sand".to_string(),
                scale: 6.0,
                offset: Some([-10.0, 2.0]),
            },
            Step::Lines {
                lines: vec![LineConfig::new("Hi", 12.0).with_character_spacing(0.2)],
                line_spacing: Some(1.6),
            },
            Step::Line {
                length: 5.0,
                angle: 90.0,
            },
            Step::OuterLoop {
                turns: 1.0,
                ending_angle: 0.0,
            },
            Step::SpiralIn { turns: 3.0 },
        ],
    };

    for name in ["recipe.json", "recipe.toml"] {
        let path = dir.path().join(name);
        recipe.save_to_file(&path).unwrap();
        let loaded = Recipe::load_from_file(&path).unwrap();
        assert_eq!(loaded, recipe, "{name}");
    }
}

#[test]
fn test_recipe_from_handwritten_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pattern.json");
    std::fs::write(
        &path,
        r#"{
            "steps": [
                { "op": "spiral_out", "radius": 60, "turns": 5 },
                { "op": "lines", "lines": [{ "text": "Sand", "scale": 12 }] },
                { "op": "spiral_in", "turns": 5 }
            ]
        }"#,
    )
    .unwrap();

    let recipe = Recipe::load_from_file(&path).unwrap();
    let builder = recipe
        .build(GlyphTable::builtin(), &Config::default())
        .unwrap();
    assert!(builder.current_radius() < 1e-6);
}

#[test]
fn test_unsupported_recipe_format() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("recipe.yaml");
    std::fs::write(&path, "steps: []").unwrap();
    let err = Recipe::load_from_file(&path).unwrap_err();
    assert!(err.to_string().contains("unsupported recipe format 'yaml'"));
}
