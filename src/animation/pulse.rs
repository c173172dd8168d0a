use std::collections::VecDeque;

/// Pulses kept alive at once before the oldest is evicted.
pub const DEFAULT_PULSE_CAPACITY: usize = 32;

/// A transient radial event. The center is normalized to `0..1` canvas space.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pulse {
    pub id: u64,
    pub center_x: f64,
    pub center_y: f64,
    pub start_time: f64,
    /// Set once the wavefront has passed every vector it can reach.
    #[serde(default)]
    pub max_reached: bool,
}

impl Pulse {
    pub fn elapsed(&self, now: f64) -> f64 {
        now - self.start_time
    }

    /// `0 <= elapsed < duration`.
    pub fn is_active(&self, now: f64, duration: f64) -> bool {
        let e = self.elapsed(now);
        e >= 0.0 && e < duration
    }
}

/// Owns the pulse list consumed by the center-pulse animation.
#[derive(Clone, Debug)]
pub struct PulseManager {
    pulses: VecDeque<Pulse>,
    next_id: u64,
    capacity: usize,
}

impl PulseManager {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_PULSE_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            pulses: VecDeque::with_capacity(capacity),
            next_id: 1,
            capacity,
        }
    }

    /// Start a pulse at normalized `(x, y)`; returns its id.
    pub fn trigger_pulse(&mut self, x: f64, y: f64, time: f64) -> u64 {
        while self.pulses.len() >= self.capacity {
            if let Some(evicted) = self.pulses.pop_front() {
                tracing::debug!(id = evicted.id, "pulse capacity reached, dropping oldest");
            }
        }
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.pulses.push_back(Pulse {
            id,
            center_x: if x.is_finite() { x.clamp(0.0, 1.0) } else { 0.5 },
            center_y: if y.is_finite() { y.clamp(0.0, 1.0) } else { 0.5 },
            start_time: time,
            max_reached: false,
        });
        id
    }

    /// Drop pulses that have expired or whose wavefront has left the canvas.
    pub fn update_pulses(&mut self, now: f64, duration: f64) {
        self.pulses
            .retain(|p| !p.max_reached && p.elapsed(now) < duration);
    }

    /// Pulses active at `now`; does not modify state.
    pub fn active_pulses(&self, now: f64, duration: f64) -> impl Iterator<Item = &Pulse> + '_ {
        self.pulses
            .iter()
            .filter(move |p| p.is_active(now, duration))
    }

    pub fn mark_max_reached(&mut self, id: u64) {
        if let Some(p) = self.pulses.iter_mut().find(|p| p.id == id) {
            p.max_reached = true;
        }
    }

    pub fn clear_pulses(&mut self) {
        self.pulses.clear();
    }

    pub fn len(&self) -> usize {
        self.pulses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pulses.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Start time of the most recently triggered pulse.
    pub fn last_start_time(&self) -> Option<f64> {
        self.pulses.back().map(|p| p.start_time)
    }
}

impl Default for PulseManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/pulse.rs"]
mod tests;
