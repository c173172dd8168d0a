use crate::{
    foundation::{
        core::{Container, Vec2},
        math::bounding_box,
        params::{ParamBag, canonical_id},
    },
    layout::{
        grid::{self, LatticeParams},
        radial::{self, PolarParams, RingDistribution, SquaresParams},
        request::{LayoutPoint, LayoutRequest, LayoutResult, MathLayout},
        scatter,
        spiral::{self, FibonacciParams, GoldenParams, LogSpiralParams},
    },
};

/// Every pattern id understood by math-mode layouts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PatternKind {
    Regular,
    Staggered,
    Hexagonal,
    Fibonacci,
    Golden,
    LogSpiral,
    Radial,
    Polar,
    Triangular,
    ConcentricSquares,
    Voronoi,
}

impl PatternKind {
    pub const ALL: [PatternKind; 11] = [
        Self::Regular,
        Self::Staggered,
        Self::Hexagonal,
        Self::Fibonacci,
        Self::Golden,
        Self::LogSpiral,
        Self::Radial,
        Self::Polar,
        Self::Triangular,
        Self::ConcentricSquares,
        Self::Voronoi,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Regular => "regular",
            Self::Staggered => "staggered",
            Self::Hexagonal => "hexagonal",
            Self::Fibonacci => "fibonacci",
            Self::Golden => "golden",
            Self::LogSpiral => "logSpiral",
            Self::Radial => "radial",
            Self::Polar => "polar",
            Self::Triangular => "triangular",
            Self::ConcentricSquares => "concentricSquares",
            Self::Voronoi => "voronoi",
        }
    }

    pub fn parse(id: &str) -> Option<Self> {
        let key = canonical_id(id);
        Self::ALL
            .into_iter()
            .find(|k| canonical_id(k.id()) == key)
            .or(match key.as_str() {
                "hex" => Some(Self::Hexagonal),
                "phyllotaxis" => Some(Self::Fibonacci),
                "goldenratio" | "goldenspiral" => Some(Self::Golden),
                "logarithmicspiral" => Some(Self::LogSpiral),
                "squares" => Some(Self::ConcentricSquares),
                "random" | "scatter" => Some(Self::Voronoi),
                _ => None,
            })
    }
}

/// Pattern with its parameters coerced to typed values.
#[derive(Clone, Copy, Debug, PartialEq)]
enum MathPattern {
    Grid { staggered: bool, params: LatticeParams },
    Hexagonal(LatticeParams),
    Triangular(LatticeParams),
    Fibonacci(FibonacciParams),
    Golden(GoldenParams),
    LogSpiral(LogSpiralParams),
    Polar(PolarParams),
    ConcentricSquares(SquaresParams),
    Voronoi { seed: u64 },
}

fn positive_or(v: f64, default: f64) -> f64 {
    if v > 0.0 { v } else { default }
}

impl MathPattern {
    fn resolve(kind: PatternKind, bag: &ParamBag<'_>) -> Self {
        let lattice = LatticeParams {
            spacing: Some(bag.f64_or("spacing", 0.0)).filter(|s| *s > 0.0),
            offset_factor: bag.f64_in("offsetFactor", 0.5, -1.0, 1.0),
        };
        match kind {
            PatternKind::Regular => Self::Grid {
                staggered: false,
                params: lattice,
            },
            PatternKind::Staggered => Self::Grid {
                staggered: true,
                params: lattice,
            },
            PatternKind::Hexagonal => Self::Hexagonal(lattice),
            PatternKind::Triangular => Self::Triangular(lattice),
            PatternKind::Fibonacci => Self::Fibonacci(FibonacciParams {
                density: positive_or(bag.f64_or("density", 1.0), 1.0),
                scale: positive_or(bag.f64_or("scale", 1.0), 1.0),
                golden_angle_deg: bag.f64_or("goldenAngle", 137.5),
                radius_factor: positive_or(bag.f64_or("radiusFactor", 0.95), 0.95),
            }),
            PatternKind::Golden => Self::Golden(GoldenParams {
                expansion: positive_or(bag.f64_or("expansion", 1.0), 1.0),
                compression: positive_or(bag.f64_or("compression", 1.0), 1.0),
                rotation_deg: bag.f64_or("rotation", 0.0),
            }),
            PatternKind::LogSpiral => Self::LogSpiral(LogSpiralParams {
                arms: bag.u32_or("arms", 3).max(1),
                tightness: positive_or(bag.f64_or("tightness", 0.2), 0.2),
                start_radius: positive_or(bag.f64_or("startRadius", 4.0), 4.0),
            }),
            PatternKind::Radial | PatternKind::Polar => {
                let distribution = match (kind, bag.str_lower("distribution").as_deref()) {
                    (PatternKind::Polar, Some("logarithmic" | "log")) => {
                        RingDistribution::Logarithmic
                    }
                    _ => RingDistribution::Uniform,
                };
                Self::Polar(PolarParams {
                    bias: bag.f64_in("bias", 0.0, -1.0, 1.0),
                    distribution,
                    rotation_deg: bag.f64_or("rotation", 0.0),
                })
            }
            PatternKind::ConcentricSquares => Self::ConcentricSquares(SquaresParams {
                num_squares: bag.u32_or("numSquares", 5),
                rotation_deg: bag.f64_or("rotation", 0.0),
            }),
            PatternKind::Voronoi => Self::Voronoi {
                seed: bag.u64_or("seed", 42),
            },
        }
    }

    fn generate(self, count: u32, container: &Container) -> LayoutResult {
        match self {
            Self::Grid { staggered, params } => {
                grid::counted_grid(count, staggered, params, container)
            }
            Self::Hexagonal(p) => grid::hexagonal(count, p, container),
            Self::Triangular(p) => grid::triangular(count, p, container),
            Self::Fibonacci(p) => spiral::fibonacci(count, p, container),
            Self::Golden(p) => spiral::golden(count, p, container),
            Self::LogSpiral(p) => spiral::log_spiral(count, p, container),
            Self::Polar(p) => radial::polar(count, p, container),
            Self::ConcentricSquares(p) => radial::concentric_squares(count, p, container),
            Self::Voronoi { seed } => scatter::seeded_scatter(count, seed, container),
        }
    }
}

fn math_layout(req: &MathLayout) -> LayoutResult {
    if req.count == 0 {
        return LayoutResult::empty();
    }
    let kind = PatternKind::parse(&req.pattern).unwrap_or_else(|| {
        tracing::warn!(pattern = %req.pattern, "unknown layout pattern, using regular grid");
        PatternKind::Regular
    });
    let bag = ParamBag::new(&req.pattern_params);
    let mut result = MathPattern::resolve(kind, &bag).generate(req.count, &req.container);
    result.points.truncate(req.count as usize);
    result
}

/// Generate the point layout described by `request`.
///
/// Pure and deterministic. Degenerate requests (zero counts, zero-sized
/// containers) produce an empty result rather than an error.
#[tracing::instrument(level = "debug", skip_all)]
pub fn generate_layout(request: &LayoutRequest) -> LayoutResult {
    let container = request.container();
    if container.is_degenerate() {
        return LayoutResult::empty();
    }
    let mut result = match request {
        LayoutRequest::Basic(b) => grid::basic_grid(b),
        LayoutRequest::Math(m) => math_layout(m),
    };
    result
        .points
        .retain(|p| p.x.is_finite() && p.y.is_finite());
    center_points(&mut result.points, container);
    tracing::debug!(points = result.points.len(), "layout generated");
    result
}

/// Translate `points` so their bounding-box center sits on the container center.
pub fn center_points(points: &mut [LayoutPoint], container: &Container) {
    let Some(bbox) = bounding_box(points.iter().map(LayoutPoint::position)) else {
        return;
    };
    let shift: Vec2 = container.center() - bbox.center();
    for p in points.iter_mut() {
        p.x += shift.x;
        p.y += shift.y;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/generator.rs"]
mod tests;
