use super::*;

const MINIMAL: &str = r#"{
    "layout": {
        "mode": "basic",
        "rows": 2,
        "cols": 3,
        "container": { "width": 300, "height": 200 }
    }
}"#;

#[test]
fn minimal_scene_takes_defaults() {
    let scene = SceneConfig::from_json_str(MINIMAL).unwrap();
    assert_eq!(scene.canvas, Canvas::default());
    assert_eq!(scene.animation.kind, "none");
    assert_eq!(scene.timing, TimingConfig::default());
    assert_eq!(scene.vectors, VectorSettings::default());
    assert_eq!(scene.mouse_influence, MouseInfluence::default());
}

#[test]
fn full_scene_parses() {
    let json = r##"{
        "canvas": { "width": 640, "height": 480 },
        "layout": {
            "mode": "math",
            "count": 120,
            "pattern": "fibonacci",
            "patternParams": { "density": 1.2 },
            "container": { "width": 640, "height": 480, "margin": 10 }
        },
        "vectors": { "length": 18, "color": "#ff8800", "flockGroups": 3 },
        "animation": { "kind": "smoothWaves", "props": { "amplitude": 45 } },
        "mouseInfluence": { "strength": 0.5, "mode": "repel" },
        "timing": { "smoothing": 0.5, "maxAngleStep": 30 }
    }"##;
    let scene = SceneConfig::from_json_str(json).unwrap();
    assert_eq!(scene.canvas.width, 640.0);
    assert_eq!(scene.vectors.length, 18.0);
    assert_eq!(scene.vectors.width, VectorSettings::default().width);
    assert_eq!(scene.vectors.flock_groups, 3);
    assert_eq!(scene.mouse_influence.radius, 160.0);
    assert_eq!(scene.timing.max_angle_step, Some(30.0));
    assert_eq!(scene.timing.max_delta, DEFAULT_MAX_DELTA);

    let back = SceneConfig::from_json_str(&scene.to_json_pretty().unwrap()).unwrap();
    assert_eq!(back, scene);
}

#[test]
fn invalid_values_are_rejected() {
    let mut scene = SceneConfig::from_json_str(MINIMAL).unwrap();
    scene.canvas.width = 0.0;
    assert!(matches!(scene.validate(), Err(VectorGridError::Validation(_))));

    let mut scene = SceneConfig::from_json_str(MINIMAL).unwrap();
    scene.timing.smoothing = 0.0;
    assert!(scene.validate().is_err());

    let mut scene = SceneConfig::from_json_str(MINIMAL).unwrap();
    scene.vectors.opacity = 2.0;
    assert!(scene.validate().is_err());

    let mut scene = SceneConfig::from_json_str(MINIMAL).unwrap();
    scene.animation.props = Some(serde_json::json!([1, 2]));
    assert!(scene.validate().is_err());
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = SceneConfig::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, VectorGridError::Serde(_)));
    let err = SceneConfig::from_json_str(r#"{ "layout": { "mode": "hexagon" } }"#).unwrap_err();
    assert!(matches!(err, VectorGridError::Serde(_)));
}

#[test]
fn unknown_animation_is_not_a_config_error() {
    let json = MINIMAL.replacen('{', r#"{ "animation": { "kind": "nonexistent-type" },"#, 1);
    assert!(SceneConfig::from_json_str(&json).is_ok());
}

#[test]
fn non_finite_container_is_a_layout_error() {
    let mut scene = SceneConfig::from_json_str(MINIMAL).unwrap();
    if let LayoutRequest::Basic(basic) = &mut scene.layout {
        basic.container.width = f64::INFINITY;
    }
    let err = scene.validate().unwrap_err();
    assert!(matches!(err, VectorGridError::Layout(_)), "{err}");
}
