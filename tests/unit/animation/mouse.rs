use super::*;
use crate::{layout::request::LayoutPoint, vector::item::{VectorSettings, init_vectors}};

fn one_vector_at(x: f64, y: f64) -> Vec<AnimatedVectorItem> {
    init_vectors(&[LayoutPoint::at(x, y)], &VectorSettings::default())
}

#[test]
fn disabled_by_default() {
    let mut v = one_vector_at(0.0, 0.0);
    MouseInfluence::default().apply(&mut v, Some(Point::new(10.0, 10.0)));
    assert_eq!(v[0].angle, 0.0);
}

#[test]
fn full_strength_attract_points_at_mouse() {
    let mut v = one_vector_at(0.0, 0.0);
    let m = MouseInfluence {
        strength: 1.0,
        radius: 1.0e9,
        mode: InfluenceMode::Attract,
    };
    m.apply(&mut v, Some(Point::new(0.0, 10.0)));
    assert!((v[0].angle - 90.0).abs() < 1e-6);
}

#[test]
fn repel_points_away() {
    let mut v = one_vector_at(0.0, 0.0);
    let m = MouseInfluence {
        strength: 1.0,
        radius: 1.0e9,
        mode: InfluenceMode::Repel,
    };
    m.apply(&mut v, Some(Point::new(0.0, 10.0)));
    assert!((v[0].angle - 270.0).abs() < 1e-6);
}

#[test]
fn outside_radius_or_without_mouse_is_untouched() {
    let m = MouseInfluence {
        strength: 1.0,
        radius: 5.0,
        mode: InfluenceMode::Attract,
    };
    let mut v = one_vector_at(0.0, 0.0);
    m.apply(&mut v, Some(Point::new(0.0, 10.0)));
    assert_eq!(v[0].angle, 0.0);
    m.apply(&mut v, None);
    assert_eq!(v[0].angle, 0.0);
}
