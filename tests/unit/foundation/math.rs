use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn degrees_wrap_into_half_open_range() {
    assert!(approx(normalize_degrees(370.0), 10.0));
    assert!(approx(normalize_degrees(-10.0), 350.0));
    assert_eq!(normalize_degrees(360.0), 0.0);
    assert_eq!(normalize_degrees(f64::NAN), 0.0);
    let tiny = normalize_degrees(-1e-20);
    assert!((0.0..360.0).contains(&tiny));
}

#[test]
fn radians_wrap_into_pi_range() {
    assert!((normalize_radians(3.0 * PI).abs() - PI).abs() < 1e-9);
    assert!(approx(normalize_radians(-PI), PI));
    assert!(approx(normalize_radians(0.5), 0.5));
}

#[test]
fn shortest_delta_crosses_zero() {
    assert!(approx(shortest_angle_delta(350.0, 10.0), 20.0));
    assert!(approx(shortest_angle_delta(10.0, 350.0), -20.0));
    assert!(approx(shortest_angle_delta(0.0, 180.0), 180.0));
}

#[test]
fn lerp_angle_takes_the_short_way_round() {
    let mid = lerp_angle(350.0, 10.0, 0.5);
    assert!(approx(mid, 0.0) || approx(mid, 360.0));

    let mut a = 350.0;
    let mut travelled = 0.0;
    for _ in 0..10 {
        let next = lerp_angle(a, 10.0, 0.25);
        travelled += shortest_angle_delta(a, next).abs();
        a = next;
    }
    assert!(travelled <= 20.0 + 1e-9);
    assert!(lerp_angle(90.0, 180.0, f64::NAN) == 90.0);
}

#[test]
fn centroid_and_bounds() {
    let pts = [Point::new(0.0, 0.0), Point::new(4.0, 0.0), Point::new(2.0, 6.0)];
    assert_eq!(centroid(&pts), Some(Point::new(2.0, 2.0)));
    assert_eq!(centroid(&[]), None);
    let bb = bounding_box(pts.iter().copied()).unwrap();
    assert_eq!(bb, Rect::new(0.0, 0.0, 4.0, 6.0));
    assert!(bounding_box(std::iter::empty()).is_none());
}

#[test]
fn id_hash_is_stable() {
    let mut a = Fnv1a64::new_default();
    a.write_bytes(b"v-1-2");
    assert_eq!(a.finish(), hash_id("v-1-2"));
    assert_ne!(hash_id("v-1-2"), hash_id("v-2-1"));
}

#[test]
fn rng_is_deterministic_and_bounded() {
    let mut a = Rng64::new(123);
    let mut b = Rng64::new(123);
    for _ in 0..32 {
        let x = a.next_f64_01();
        assert_eq!(x, b.next_f64_01());
        assert!((0.0..1.0).contains(&x));
    }
}

#[test]
fn value_noise_is_continuous_and_bounded() {
    let a = value_noise_1d(9, 2.0);
    let b = value_noise_1d(9, 2.0 + 1e-7);
    assert!((a - b).abs() < 1e-5);
    for i in 0..100 {
        let v = value_noise_1d(9, f64::from(i) * 0.37);
        assert!((-1.0..=1.0).contains(&v));
    }
}
