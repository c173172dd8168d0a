use crate::{
    foundation::{core::Point, math::normalize_degrees},
    layout::request::LayoutPoint,
};

/// Per-animation scratch values carried between frames.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationState {
    /// Velocity in pixels per second (flocking).
    pub vx: f64,
    pub vy: f64,
    /// Accumulated phase in degrees (vortex).
    pub phase: f64,
}

/// Mutable per-frame state of one grid glyph.
///
/// `base_*` fields are the rest state and are never written by animations;
/// `angle`, `length`, `width`, `opacity`, `x` and `y` are what gets displayed.
/// Angles are degrees in `[0, 360)`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimatedVectorItem {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub c: Option<u32>,

    pub base_x: f64,
    pub base_y: f64,
    pub x: f64,
    pub y: f64,
    pub original_x: f64,
    pub original_y: f64,

    pub base_angle: f64,
    pub angle: f64,
    pub original_angle: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_angle: Option<f64>,
    pub previous_angle: f64,

    pub length: f64,
    pub base_length: f64,
    pub original_length: f64,
    pub width: f64,
    pub base_width: f64,

    pub opacity: f64,
    pub base_opacity: f64,
    pub color: String,
    pub original_color: String,

    pub length_factor: f64,
    pub width_factor: f64,
    pub intensity_factor: f64,
    #[serde(default)]
    pub state: AnimationState,
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub custom_data: serde_json::Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flock_id: Option<u32>,
}

impl AnimatedVectorItem {
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn rest_position(&self) -> Point {
        Point::new(self.base_x, self.base_y)
    }

    /// Restore every displayed field to the rest state.
    pub fn reset_to_base(&mut self) {
        self.x = self.base_x;
        self.y = self.base_y;
        self.angle = self.base_angle;
        self.target_angle = None;
        self.length = self.base_length;
        self.width = self.base_width;
        self.opacity = self.base_opacity;
        self.color.clone_from(&self.original_color);
        self.length_factor = 1.0;
        self.width_factor = 1.0;
        self.intensity_factor = 1.0;
        self.state = AnimationState::default();
    }

    /// Recompute displayed length and width from the multiplicative factors.
    pub fn apply_factors(&mut self) {
        self.length = self.base_length * self.length_factor;
        self.width = self.base_width * self.width_factor;
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RotationOrigin {
    Start,
    #[default]
    Center,
    End,
}

/// Vector appearance used to seed the rest state of every item.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VectorSettings {
    pub length: f64,
    pub width: f64,
    pub color: String,
    pub opacity: f64,
    /// Rest angle in degrees.
    pub initial_angle: f64,
    /// Pivot used by renderers; carried through untouched.
    pub rotation_origin: RotationOrigin,
    /// Number of flocking groups; vectors are assigned round-robin.
    pub flock_groups: u32,
}

impl Default for VectorSettings {
    fn default() -> Self {
        Self {
            length: 24.0,
            width: 2.0,
            color: "#ffffff".to_string(),
            opacity: 1.0,
            initial_angle: 0.0,
            rotation_origin: RotationOrigin::Center,
            flock_groups: 1,
        }
    }
}

fn finite_or(v: f64, default: f64) -> f64 {
    if v.is_finite() { v } else { default }
}

/// Build the item array for a layout. Ids come from grid coordinates when the
/// layout provides them, otherwise from the point index.
pub fn init_vectors(points: &[LayoutPoint], settings: &VectorSettings) -> Vec<AnimatedVectorItem> {
    let defaults = VectorSettings::default();
    let length = finite_or(settings.length, defaults.length).max(0.0);
    let width = finite_or(settings.width, defaults.width).max(0.0);
    let opacity = finite_or(settings.opacity, 1.0).clamp(0.0, 1.0);
    let angle = normalize_degrees(settings.initial_angle);

    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let id = match (p.row, p.col) {
                (Some(r), Some(c)) => format!("vector-{r}-{c}"),
                _ => format!("vector-{i}"),
            };
            AnimatedVectorItem {
                id,
                r: p.row,
                c: p.col,
                base_x: p.x,
                base_y: p.y,
                x: p.x,
                y: p.y,
                original_x: p.x,
                original_y: p.y,
                base_angle: angle,
                angle,
                original_angle: angle,
                target_angle: None,
                previous_angle: angle,
                length,
                base_length: length,
                original_length: length,
                width,
                base_width: width,
                opacity,
                base_opacity: opacity,
                color: settings.color.clone(),
                original_color: settings.color.clone(),
                length_factor: 1.0,
                width_factor: 1.0,
                intensity_factor: 1.0,
                state: AnimationState::default(),
                custom_data: serde_json::Value::Null,
                flock_id: (settings.flock_groups > 0)
                    .then(|| (i as u32) % settings.flock_groups),
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/vector/item.rs"]
mod tests;
