use super::*;

fn brute_force(points: &[Point], center: Point, radius: f64) -> Vec<usize> {
    points
        .iter()
        .enumerate()
        .filter(|(_, p)| p.distance(center) <= radius)
        .map(|(i, _)| i)
        .collect()
}

#[test]
fn radius_query_matches_brute_force() {
    let mut points = Vec::new();
    for y in 0..12 {
        for x in 0..12 {
            points.push(Point::new(f64::from(x) * 7.5, f64::from(y) * 7.5));
        }
    }
    let mut grid = SpatialGrid::new(10.0);
    grid.rebuild(points.iter().copied());
    assert_eq!(grid.len(), points.len());

    for (center, radius) in [
        (Point::new(40.0, 40.0), 16.0),
        (Point::new(0.0, 0.0), 30.0),
        (Point::new(-20.0, 85.0), 25.0),
        (Point::new(50.0, 50.0), 0.0),
    ] {
        assert_eq!(
            grid.query_radius(center, radius),
            brute_force(&points, center, radius),
            "center {center:?} radius {radius}"
        );
    }
}

#[test]
fn rebuild_replaces_previous_contents() {
    let mut grid = SpatialGrid::new(5.0);
    grid.rebuild([Point::new(1.0, 1.0), Point::new(2.0, 2.0)]);
    grid.rebuild([Point::new(100.0, 100.0)]);
    assert_eq!(grid.len(), 1);
    assert!(grid.query_radius(Point::new(1.0, 1.0), 3.0).is_empty());
    assert_eq!(grid.query_radius(Point::new(100.0, 100.0), 0.5), vec![0]);
}

#[test]
fn non_finite_inputs_are_skipped() {
    let mut grid = SpatialGrid::new(0.0);
    assert_eq!(grid.cell_size(), 1.0);
    grid.rebuild([Point::new(f64::NAN, 0.0), Point::new(0.0, 0.0)]);
    assert_eq!(grid.query_radius(Point::new(0.0, 0.0), 1.0), vec![1]);
    assert!(grid.query_radius(Point::new(0.0, 0.0), f64::NAN).is_empty());
}
