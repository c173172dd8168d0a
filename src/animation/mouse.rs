use crate::{
    foundation::{
        core::Point,
        math::{angle_between, clamp01, distance, lerp_angle, normalize_degrees},
    },
    vector::item::AnimatedVectorItem,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InfluenceMode {
    #[default]
    Attract,
    Repel,
}

/// Global pointer influence applied after whichever animation is active.
///
/// Disabled while `strength` is zero.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MouseInfluence {
    /// Blend weight in `[0, 1]` at the pointer itself.
    pub strength: f64,
    /// Pixels; vectors farther away are untouched.
    pub radius: f64,
    pub mode: InfluenceMode,
}

impl Default for MouseInfluence {
    fn default() -> Self {
        Self {
            strength: 0.0,
            radius: 160.0,
            mode: InfluenceMode::Attract,
        }
    }
}

impl MouseInfluence {
    pub fn is_enabled(&self) -> bool {
        self.strength.is_finite()
            && self.strength > 0.0
            && self.radius.is_finite()
            && self.radius > 0.0
    }

    /// Turn vectors near `mouse` toward it (or away from it), weighted by proximity.
    pub fn apply(&self, vectors: &mut [AnimatedVectorItem], mouse: Option<Point>) {
        let Some(mouse) = mouse else {
            return;
        };
        if !self.is_enabled() {
            return;
        }
        let strength = clamp01(self.strength);
        for v in vectors {
            let pos = v.position();
            let d = distance(pos, mouse);
            if d >= self.radius {
                continue;
            }
            let weight = strength * (1.0 - d / self.radius);
            let toward = angle_between(pos, mouse);
            let target = match self.mode {
                InfluenceMode::Attract => toward,
                InfluenceMode::Repel => normalize_degrees(toward + 180.0),
            };
            v.angle = lerp_angle(v.angle, target, weight);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/mouse.rs"]
mod tests;
