//! Frame-time and value smoothing.
//!
//! Browsers and compositors hand out irregular frame intervals; feeding those
//! straight into the animations makes glyphs pop. Everything here is a small
//! first-order filter with explicit state.

use crate::foundation::math::{lerp_angle, normalize_degrees, shortest_angle_delta};

/// Default smoothing factor for frame deltas.
pub const DEFAULT_DELTA_SMOOTHING: f64 = 0.2;
/// Upper bound on a single frame delta, in seconds.
pub const DEFAULT_MAX_DELTA: f64 = 0.1;

/// Exponential low-pass filter: `value += alpha * (input - value)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LowPass {
    alpha: f64,
    value: Option<f64>,
}

impl LowPass {
    pub fn new(alpha: f64) -> Self {
        let alpha = if alpha.is_finite() {
            alpha.clamp(0.0, 1.0)
        } else {
            1.0
        };
        Self { alpha, value: None }
    }

    /// Feed one sample; the first sample initializes the filter.
    pub fn update(&mut self, input: f64) -> f64 {
        if !input.is_finite() {
            return self.value.unwrap_or(0.0);
        }
        let next = match self.value {
            None => input,
            Some(v) => v + self.alpha * (input - v),
        };
        self.value = Some(next);
        next
    }

    pub fn value(&self) -> Option<f64> {
        self.value
    }

    pub fn reset(&mut self) {
        self.value = None;
    }
}

/// Turns host timestamps into smoothed, clamped frame deltas.
#[derive(Clone, Copy, Debug)]
pub struct FrameTimer {
    filter: LowPass,
    max_delta: f64,
    last: Option<f64>,
}

impl FrameTimer {
    pub fn new(smoothing: f64, max_delta: f64) -> Self {
        let max_delta = if max_delta.is_finite() && max_delta > 0.0 {
            max_delta
        } else {
            DEFAULT_MAX_DELTA
        };
        Self {
            filter: LowPass::new(smoothing),
            max_delta,
            last: None,
        }
    }

    /// Advance to host time `now` (seconds) and return the smoothed delta.
    ///
    /// The first call, and any call where the clock runs backwards, yields `0`.
    pub fn tick(&mut self, now: f64) -> f64 {
        let raw = match self.last {
            Some(prev) if now.is_finite() && now >= prev => now - prev,
            _ => 0.0,
        };
        if now.is_finite() {
            self.last = Some(now);
        }
        if raw == 0.0 && self.filter.value().is_none() {
            return 0.0;
        }
        self.filter.update(raw.min(self.max_delta)).clamp(0.0, self.max_delta)
    }

    /// Forget the last timestamp so the next tick does not see the gap.
    pub fn rebase(&mut self) {
        self.last = None;
    }

    pub fn max_delta(&self) -> f64 {
        self.max_delta
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new(DEFAULT_DELTA_SMOOTHING, DEFAULT_MAX_DELTA)
    }
}

/// One step of a low-pass filter on an angle, following the shorter arc.
pub fn angular_low_pass(current: f64, target: f64, alpha: f64) -> f64 {
    lerp_angle(current, target, alpha)
}

/// Limit the change between two consecutive displayed angles to `max_step` degrees.
///
/// Larger changes are treated as jumps and replaced by a `max_step` move in the
/// same direction.
pub fn correct_angle_jump(previous: f64, current: f64, max_step: f64) -> f64 {
    let delta = shortest_angle_delta(previous, current);
    if !max_step.is_finite() || max_step <= 0.0 || delta.abs() <= max_step {
        return normalize_degrees(current);
    }
    normalize_degrees(previous + max_step.copysign(delta))
}

#[cfg(test)]
#[path = "../../tests/unit/animation/smoothing.rs"]
mod tests;
