//! Ring-based patterns: polar/radial rings and concentric squares.

use std::f64::consts::TAU;

use crate::{
    foundation::core::Container,
    layout::request::{LayoutPoint, LayoutResult},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum RingDistribution {
    #[default]
    Uniform,
    Logarithmic,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct PolarParams {
    /// `[-1, 1]`: negative favours rings, positive favours lines.
    pub bias: f64,
    pub distribution: RingDistribution,
    pub rotation_deg: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct SquaresParams {
    pub num_squares: u32,
    pub rotation_deg: f64,
}

/// Maps the `[-1, 1]` bias control onto a `[0.25, 1.75]` line multiplier.
pub(crate) fn bias_factor(bias: f64) -> f64 {
    1.0 + 0.75 * bias.clamp(-1.0, 1.0)
}

pub(crate) fn polar(count: u32, p: PolarParams, container: &Container) -> LayoutResult {
    let max_r = container.max_radius();
    let c = container.center();
    let num_lines = ((f64::from(count).sqrt() * bias_factor(p.bias)).round() as u32).max(1);
    let num_rings = count.div_ceil(num_lines);
    let rotation = p.rotation_deg.to_radians();

    let mut points = Vec::with_capacity(count as usize);
    let mut remaining = count;
    for ring in 0..num_rings {
        if remaining == 0 {
            break;
        }
        let mut t = (f64::from(ring) + 0.5) / f64::from(num_rings);
        if p.distribution == RingDistribution::Logarithmic {
            t = t.powf(1.5);
        }
        let r = t * max_r;
        let on_ring = remaining.min(num_lines);
        let step = TAU / f64::from(on_ring);
        for line in 0..on_ring {
            let theta = f64::from(line) * step + rotation;
            points.push(LayoutPoint {
                ring: Some(ring),
                line: Some(line),
                ..LayoutPoint::at(c.x + r * theta.cos(), c.y + r * theta.sin())
            });
        }
        remaining -= on_ring;
    }

    LayoutResult {
        points,
        rings: Some(num_rings),
        lines: Some(num_lines),
        ..LayoutResult::default()
    }
}

/// Position at arc length `d` along the perimeter of an axis-aligned square of
/// half-size `h`, walking clockwise (screen space) from the top-left corner.
fn perimeter_point(h: f64, d: f64) -> (f64, f64) {
    let side = 2.0 * h;
    if side <= 0.0 {
        return (0.0, 0.0);
    }
    let d = d.rem_euclid(4.0 * side);
    let edge = ((d / side).floor() as u32).min(3);
    let o = d - f64::from(edge) * side;
    match edge {
        0 => (-h + o, -h),
        1 => (h, -h + o),
        2 => (h - o, h),
        _ => (-h, h - o),
    }
}

pub(crate) fn concentric_squares(
    count: u32,
    p: SquaresParams,
    container: &Container,
) -> LayoutResult {
    if p.num_squares == 0 {
        return LayoutResult::empty();
    }
    let squares = p.num_squares.min(count);
    let max_r = container.max_radius();
    let c = container.center();
    let (sin, cos) = p.rotation_deg.to_radians().sin_cos();

    let per_square: Vec<u32> = (0..squares)
        .map(|s| count / squares + u32::from(s < count % squares))
        .collect();

    let mut points = Vec::with_capacity(count as usize);
    for i in 0..count {
        let s = i % squares;
        let k = i / squares;
        let n = per_square[s as usize];
        let h = max_r * f64::from(s + 1) / f64::from(squares);
        let perimeter = 8.0 * h;
        let (lx, ly) = perimeter_point(h, f64::from(k) * perimeter / f64::from(n));
        let (rx, ry) = (lx * cos - ly * sin, lx * sin + ly * cos);
        points.push(LayoutPoint {
            ring: Some(s),
            ..LayoutPoint::at(c.x + rx, c.y + ry)
        });
    }

    LayoutResult {
        points,
        rings: Some(squares),
        ..LayoutResult::default()
    }
}
