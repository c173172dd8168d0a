use super::*;
use crate::layout::request::{BasicLayout, BasicPattern};
use serde_json::json;

fn container(w: f64, h: f64, margin: f64) -> Container {
    Container::new(w, h, margin)
}

fn math(count: u32, pattern: &str, params: serde_json::Value) -> LayoutRequest {
    LayoutRequest::Math(MathLayout {
        count,
        pattern: pattern.to_string(),
        pattern_params: params,
        container: container(400.0, 300.0, 20.0),
    })
}

fn assert_centered(result: &LayoutResult, c: &Container) {
    let bbox = bounding_box(result.points.iter().map(LayoutPoint::position)).unwrap();
    let center = bbox.center();
    assert!((center.x - c.width / 2.0).abs() < 1e-6, "{center:?}");
    assert!((center.y - c.height / 2.0).abs() < 1e-6, "{center:?}");
}

#[test]
fn basic_three_by_three_fills_container() {
    let req = LayoutRequest::Basic(BasicLayout {
        rows: 3,
        cols: 3,
        spacing_override: None,
        pattern: BasicPattern::Regular,
        container: container(100.0, 100.0, 0.0),
    });
    let out = generate_layout(&req);
    assert_eq!(out.points.len(), 9);
    assert_eq!(out.spacing, Some(50.0));
    assert_eq!((out.rows, out.cols), (Some(3), Some(3)));
    assert_eq!(out.points[0].position(), crate::foundation::core::Point::new(0.0, 0.0));
    assert_eq!(out.points[8].position(), crate::foundation::core::Point::new(100.0, 100.0));
    assert_eq!(out.points[4].row, Some(1));
    assert_eq!(out.points[4].col, Some(1));
}

#[test]
fn basic_staggered_offsets_odd_rows_and_stays_centered() {
    let c = container(200.0, 100.0, 10.0);
    let req = LayoutRequest::Basic(BasicLayout {
        rows: 4,
        cols: 5,
        spacing_override: Some(20.0),
        pattern: BasicPattern::Staggered,
        container: c,
    });
    let out = generate_layout(&req);
    assert_eq!(out.points.len(), 20);
    let row0 = out.points[0].x;
    let row1 = out.points[5].x;
    assert!((row1 - row0 - 10.0).abs() < 1e-9);
    assert_centered(&out, &c);
}

#[test]
fn single_row_uses_full_span() {
    let req = LayoutRequest::Basic(BasicLayout {
        rows: 1,
        cols: 5,
        spacing_override: None,
        pattern: BasicPattern::Regular,
        container: container(100.0, 400.0, 0.0),
    });
    let out = generate_layout(&req);
    assert_eq!(out.spacing, Some(25.0));
    assert!(out.points.iter().all(|p| (p.y - 200.0).abs() < 1e-9));
}

#[test]
fn degenerate_inputs_are_empty() {
    let zero_rows = LayoutRequest::Basic(BasicLayout {
        rows: 0,
        cols: 4,
        spacing_override: None,
        pattern: BasicPattern::Regular,
        container: container(100.0, 100.0, 0.0),
    });
    assert!(generate_layout(&zero_rows).is_empty());
    assert!(generate_layout(&math(0, "fibonacci", json!({}))).is_empty());
    assert!(generate_layout(&math(10, "concentricSquares", json!({"numSquares": 0}))).is_empty());

    let zero_box = LayoutRequest::Math(MathLayout {
        count: 10,
        pattern: "hexagonal".to_string(),
        pattern_params: json!({}),
        container: container(0.0, 100.0, 0.0),
    });
    assert!(generate_layout(&zero_box).is_empty());
}

#[test]
fn every_pattern_respects_count_and_centering() {
    let c = container(400.0, 300.0, 20.0);
    for kind in PatternKind::ALL {
        for count in [1u32, 2, 7, 50, 333] {
            let out = generate_layout(&math(count, kind.id(), json!({})));
            assert!(
                out.points.len() <= count as usize,
                "{} emitted {} > {count}",
                kind.id(),
                out.points.len()
            );
            assert!(!out.is_empty(), "{} produced nothing for {count}", kind.id());
            assert_centered(&out, &c);
        }
    }
}

#[test]
fn lattice_patterns_emit_exactly_count() {
    for id in [
        "regular",
        "staggered",
        "hexagonal",
        "triangular",
        "polar",
        "radial",
        "logSpiral",
        "voronoi",
    ] {
        let out = generate_layout(&math(97, id, json!({})));
        assert_eq!(out.points.len(), 97, "{id}");
    }
}

#[test]
fn layouts_are_deterministic() {
    for kind in PatternKind::ALL {
        let req = math(120, kind.id(), json!({"seed": 7, "rotation": 15}));
        assert_eq!(generate_layout(&req), generate_layout(&req), "{}", kind.id());
    }
}

#[test]
fn voronoi_seed_controls_the_scatter() {
    let a = generate_layout(&math(64, "voronoi", json!({"seed": 42})));
    let b = generate_layout(&math(64, "voronoi", json!({"seed": 42})));
    let c = generate_layout(&math(64, "voronoi", json!({"seed": 43})));
    assert_eq!(a.points, b.points);
    assert_ne!(a.points, c.points);
}

#[test]
fn fibonacci_drops_points_beyond_radius() {
    let dense = generate_layout(&math(200, "fibonacci", json!({"density": 2.0})));
    assert!(dense.points.len() < 200);
    assert!(dense.points.len() >= 40);
}

#[test]
fn log_spiral_clamps_instead_of_dropping() {
    let out = generate_layout(&math(
        60,
        "logSpiral",
        json!({"arms": 4, "tightness": 0.9, "startRadius": 500.0}),
    ));
    assert_eq!(out.points.len(), 60);
    assert_eq!(out.arms, Some(4));
    assert_eq!(out.points[5].arm, Some(1));
}

#[test]
fn polar_decomposes_into_rings_and_lines() {
    let out = generate_layout(&math(100, "polar", json!({})));
    assert_eq!(out.lines, Some(10));
    assert_eq!(out.rings, Some(10));
    assert_eq!(out.points[0].ring, Some(0));
    assert_eq!(out.points[10].ring, Some(1));
    assert_eq!(out.points[10].line, Some(0));

    let biased = generate_layout(&math(100, "polar", json!({"bias": -1.0})));
    assert_eq!(biased.lines, Some(3));
    assert_eq!(biased.rings, Some(34));
    assert_eq!(biased.points.len(), 100);
}

#[test]
fn radial_ignores_logarithmic_distribution() {
    let radial = generate_layout(&math(50, "radial", json!({"distribution": "logarithmic"})));
    let uniform = generate_layout(&math(50, "polar", json!({})));
    assert_eq!(radial.points, uniform.points);
    let log = generate_layout(&math(50, "polar", json!({"distribution": "logarithmic"})));
    assert_ne!(log.points, uniform.points);
}

#[test]
fn concentric_squares_round_robin() {
    let out = generate_layout(&math(12, "concentricSquares", json!({"numSquares": 3})));
    assert_eq!(out.points.len(), 12);
    assert_eq!(out.rings, Some(3));
    let rings: Vec<_> = out.points.iter().map(|p| p.ring.unwrap()).collect();
    assert_eq!(rings, vec![0, 1, 2, 0, 1, 2, 0, 1, 2, 0, 1, 2]);
}

#[test]
fn unknown_pattern_falls_back_to_regular() {
    let unknown = generate_layout(&math(30, "spirograph", json!({})));
    let regular = generate_layout(&math(30, "regular", json!({})));
    assert_eq!(unknown, regular);
}

#[test]
fn pattern_ids_parse_loosely() {
    assert_eq!(PatternKind::parse("log_spiral"), Some(PatternKind::LogSpiral));
    assert_eq!(PatternKind::parse("CONCENTRIC-SQUARES"), Some(PatternKind::ConcentricSquares));
    assert_eq!(PatternKind::parse("phyllotaxis"), Some(PatternKind::Fibonacci));
    assert_eq!(PatternKind::parse("nope"), None);
    for kind in PatternKind::ALL {
        assert_eq!(PatternKind::parse(kind.id()), Some(kind));
    }
}

#[test]
fn malformed_params_fall_back_to_defaults() {
    let good = generate_layout(&math(80, "hexagonal", json!({})));
    let bad = generate_layout(&math(
        80,
        "hexagonal",
        json!({"offsetFactor": "wat", "spacing": -3}),
    ));
    assert_eq!(good, bad);
}

#[test]
fn request_json_round_trips_through_serde() {
    let s = r#"{"mode":"math","count":5,"pattern":"golden","patternParams":{"rotation":30},"container":{"width":50,"height":50}}"#;
    let req: LayoutRequest = serde_json::from_str(s).unwrap();
    let LayoutRequest::Math(m) = &req else {
        panic!("expected math mode");
    };
    assert_eq!(m.container.margin, 0.0);
    assert_eq!(generate_layout(&req).points.len(), 5);
}
