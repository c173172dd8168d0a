use std::f64::consts::PI;

use crate::foundation::core::{Point, Rect};

/// Golden ratio `phi`.
pub const PHI: f64 = 1.618_033_988_749_895;

/// Wrap an angle in degrees into `[0, 360)`.
pub fn normalize_degrees(deg: f64) -> f64 {
    if !deg.is_finite() {
        return 0.0;
    }
    let v = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
    if v >= 360.0 { 0.0 } else { v }
}

/// Wrap an angle in radians into `(-pi, pi]`.
pub fn normalize_radians(rad: f64) -> f64 {
    if !rad.is_finite() {
        return 0.0;
    }
    let v = (rad + PI).rem_euclid(2.0 * PI) - PI;
    if v <= -PI { v + 2.0 * PI } else { v }
}

/// Signed shortest rotation from `from` to `to`, in degrees, within `(-180, 180]`.
pub fn shortest_angle_delta(from: f64, to: f64) -> f64 {
    let d = normalize_degrees(to - from);
    if d > 180.0 { d - 360.0 } else { d }
}

/// Move `current` toward `target` along the shorter arc by fraction `t`.
///
/// `t` is clamped to `[0, 1]`; the result is normalized to `[0, 360)`.
pub fn lerp_angle(current: f64, target: f64, t: f64) -> f64 {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    normalize_degrees(current + shortest_angle_delta(current, target) * t)
}

/// Direction of the vector `from -> to`, in degrees.
pub fn angle_between(from: Point, to: Point) -> f64 {
    normalize_degrees((to.y - from.y).atan2(to.x - from.x).to_degrees())
}

pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

pub fn clamp01(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

pub fn smoothstep(t: f64) -> f64 {
    let t = clamp01(t);
    t * t * (3.0 - 2.0 * t)
}

pub fn distance(a: Point, b: Point) -> f64 {
    a.distance(b)
}

pub fn centroid(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }
    let n = points.len() as f64;
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Some(Point::new(sx / n, sy / n))
}

pub fn bounding_box<I>(points: I) -> Option<Rect>
where
    I: IntoIterator<Item = Point>,
{
    let mut it = points.into_iter();
    let first = it.next()?;
    let mut rect = Rect::from_points(first, first);
    for p in it {
        rect = rect.union_pt(p);
    }
    Some(rect)
}

/// FNV-1a 64-bit hasher, used to derive stable seeds from vector ids.
#[derive(Clone, Copy, Debug)]
pub struct Fnv1a64(u64);

impl Fnv1a64 {
    pub const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01B3;

    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub fn new_default() -> Self {
        Self(Self::OFFSET_BASIS)
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        let mut h = self.0;
        for &b in bytes {
            h ^= u64::from(b);
            h = h.wrapping_mul(Self::PRIME);
        }
        self.0 = h;
    }

    pub fn finish(self) -> u64 {
        self.0
    }
}

/// Stable 64-bit seed for a vector id.
pub fn hash_id(id: &str) -> u64 {
    let mut h = Fnv1a64::new_default();
    h.write_bytes(id.as_bytes());
    h.finish()
}

/// Small seeded PRNG (SplitMix64). Identical seeds give identical sequences.
#[derive(Clone, Copy, Debug)]
pub struct Rng64 {
    state: u64,
}

impl Rng64 {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform in `[0, 1)` with 53 bits of precision.
    pub fn next_f64_01(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) * (1.0 / ((1u64 << 53) as f64))
    }

    /// Uniform in `[-1, 1)`.
    pub fn next_signed(&mut self) -> f64 {
        self.next_f64_01() * 2.0 - 1.0
    }
}

fn lattice01(seed: u64, i: i64) -> f64 {
    let mut rng = Rng64::new(seed ^ (i as u64).wrapping_mul(0xD6E8_FEB8_6659_FD93));
    rng.next_f64_01()
}

/// 1D value noise in `[-1, 1]`, smoothly interpolated between integer lattice points.
pub fn value_noise_1d(seed: u64, x: f64) -> f64 {
    if !x.is_finite() {
        return 0.0;
    }
    let i0 = x.floor();
    let t = smoothstep(x - i0);
    let i0 = i0 as i64;
    let a = lattice01(seed, i0) * 2.0 - 1.0;
    let b = lattice01(seed, i0.wrapping_add(1)) * 2.0 - 1.0;
    lerp(a, b, t)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
