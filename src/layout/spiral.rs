//! Spiral families: phyllotaxis (fibonacci), golden-ratio and logarithmic spirals.
//!
//! Drop vs clamp is chosen per pattern: the phyllotaxis spirals discard points
//! beyond their radius limit, the logarithmic spiral pins them to the boundary.

use std::f64::consts::{PI, TAU};

use crate::{
    foundation::{core::Container, math::PHI},
    layout::request::{LayoutPoint, LayoutResult},
};

/// Upper bound on the per-arm sweep of a logarithmic spiral.
const LOG_SPIRAL_MAX_SWEEP: f64 = 8.0 * PI;

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct FibonacciParams {
    pub density: f64,
    pub scale: f64,
    pub golden_angle_deg: f64,
    pub radius_factor: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct GoldenParams {
    pub expansion: f64,
    pub compression: f64,
    pub rotation_deg: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct LogSpiralParams {
    pub arms: u32,
    pub tightness: f64,
    pub start_radius: f64,
}

fn polar(center: (f64, f64), r: f64, theta: f64) -> (f64, f64) {
    (center.0 + r * theta.cos(), center.1 + r * theta.sin())
}

/// Radii are measured in `max_radius / sqrt(count)`, so `density` and `scale`
/// are relative to a spiral that just fills the container.
pub(crate) fn fibonacci(count: u32, p: FibonacciParams, container: &Container) -> LayoutResult {
    let max_r = container.max_radius();
    let c = container.center();
    let unit = max_r / f64::from(count).sqrt();
    let limit = p.radius_factor * max_r;
    let step = p.golden_angle_deg.to_radians();

    let mut points = Vec::with_capacity(count as usize);
    for n in 0..count {
        let nf = f64::from(n);
        let r = p.density * nf.sqrt() * p.scale * unit;
        if r > limit {
            continue;
        }
        let (x, y) = polar((c.x, c.y), r, nf * step);
        points.push(LayoutPoint::at(x, y));
    }
    LayoutResult::with_points(points)
}

pub(crate) fn golden(count: u32, p: GoldenParams, container: &Container) -> LayoutResult {
    let max_r = container.max_radius();
    let c = container.center();
    let golden_angle = TAU / PHI;
    let rotation = p.rotation_deg.to_radians();
    let stretch = p.expansion / p.compression;

    let mut points = Vec::with_capacity(count as usize);
    for n in 0..count {
        let nf = f64::from(n);
        let r = max_r * (nf / f64::from(count)).sqrt() * stretch;
        if r > max_r * (1.0 + 1e-9) {
            continue;
        }
        let (x, y) = polar((c.x, c.y), r, nf * golden_angle + rotation);
        points.push(LayoutPoint::at(x, y));
    }
    LayoutResult::with_points(points)
}

pub(crate) fn log_spiral(count: u32, p: LogSpiralParams, container: &Container) -> LayoutResult {
    let max_r = container.max_radius();
    let c = container.center();
    let arms = p.arms.clamp(1, count);
    let per_arm = count.div_ceil(arms);

    let sweep = if max_r > p.start_radius {
        ((max_r / p.start_radius).ln() / p.tightness).min(LOG_SPIRAL_MAX_SWEEP)
    } else {
        LOG_SPIRAL_MAX_SWEEP
    };
    let arm_step = TAU / f64::from(arms);

    let mut points = Vec::with_capacity(count as usize);
    for i in 0..count {
        let arm = i % arms;
        let k = i / arms;
        let t = if per_arm > 1 {
            f64::from(k) / f64::from(per_arm - 1)
        } else {
            0.0
        };
        let theta = t * sweep;
        let r = (p.start_radius * (p.tightness * theta).exp()).min(max_r);
        let (x, y) = polar((c.x, c.y), r, theta + f64::from(arm) * arm_step);
        points.push(LayoutPoint {
            arm: Some(arm),
            ..LayoutPoint::at(x, y)
        });
    }

    LayoutResult {
        points,
        arms: Some(arms),
        ..LayoutResult::default()
    }
}
