use crate::{
    foundation::{core::Container, math::Rng64},
    layout::request::{LayoutPoint, LayoutResult},
};

/// Seeded uniform scatter inside the margin-inset container.
///
/// The pattern id is `voronoi` for compatibility with saved configurations; the
/// points are the would-be Voronoi sites, no cells are computed.
pub(crate) fn seeded_scatter(count: u32, seed: u64, container: &Container) -> LayoutResult {
    let area = container.available_rect();
    let mut rng = Rng64::new(seed);
    let points = (0..count)
        .map(|_| {
            let x = area.x0 + rng.next_f64_01() * area.width();
            let y = area.y0 + rng.next_f64_01() * area.height();
            LayoutPoint::at(x, y)
        })
        .collect();
    LayoutResult::with_points(points)
}
