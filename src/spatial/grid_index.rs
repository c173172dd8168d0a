use std::collections::HashMap;

use crate::foundation::core::Point;

/// Uniform-cell bucket index over a set of positions.
///
/// Indices refer to the slice passed to [`SpatialGrid::rebuild`]. The index keeps no
/// state between frames beyond reused allocations; rebuild it before querying.
#[derive(Clone, Debug)]
pub struct SpatialGrid {
    cell_size: f64,
    cells: HashMap<(i64, i64), Vec<usize>>,
    positions: Vec<Point>,
}

impl SpatialGrid {
    pub fn new(cell_size: f64) -> Self {
        Self {
            cell_size: sanitize_cell(cell_size),
            cells: HashMap::new(),
            positions: Vec::new(),
        }
    }

    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    fn cell_of(&self, p: Point) -> (i64, i64) {
        (
            (p.x / self.cell_size).floor() as i64,
            (p.y / self.cell_size).floor() as i64,
        )
    }

    pub fn rebuild<I>(&mut self, positions: I)
    where
        I: IntoIterator<Item = Point>,
    {
        for bucket in self.cells.values_mut() {
            bucket.clear();
        }
        self.positions.clear();
        self.positions.extend(positions);
        for idx in 0..self.positions.len() {
            let p = self.positions[idx];
            if !(p.x.is_finite() && p.y.is_finite()) {
                continue;
            }
            let key = self.cell_of(p);
            self.cells.entry(key).or_default().push(idx);
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Visit every indexed position within `radius` of `center` (inclusive).
    pub fn for_each_within<F>(&self, center: Point, radius: f64, mut f: F)
    where
        F: FnMut(usize, Point),
    {
        if !(radius.is_finite() && radius >= 0.0 && center.x.is_finite() && center.y.is_finite())
        {
            return;
        }
        let r_sq = radius * radius;
        let span = (radius / self.cell_size).ceil() as i64;
        let (cx, cy) = self.cell_of(center);
        for gy in (cy - span)..=(cy + span) {
            for gx in (cx - span)..=(cx + span) {
                let Some(bucket) = self.cells.get(&(gx, gy)) else {
                    continue;
                };
                for &idx in bucket {
                    let p = self.positions[idx];
                    let dx = p.x - center.x;
                    let dy = p.y - center.y;
                    if dx * dx + dy * dy <= r_sq {
                        f(idx, p);
                    }
                }
            }
        }
    }

    /// Indices within `radius` of `center`, in ascending order.
    pub fn query_radius(&self, center: Point, radius: f64) -> Vec<usize> {
        let mut out = Vec::new();
        self.for_each_within(center, radius, |idx, _| out.push(idx));
        out.sort_unstable();
        out
    }
}

fn sanitize_cell(cell_size: f64) -> f64 {
    if cell_size.is_finite() && cell_size > 1e-6 {
        cell_size
    } else {
        1.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/spatial/grid_index.rs"]
mod tests;
