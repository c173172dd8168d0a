use serde_json::Value;

use crate::{
    animation::{
        mouse::MouseInfluence,
        smoothing::{DEFAULT_DELTA_SMOOTHING, DEFAULT_MAX_DELTA},
    },
    foundation::{
        core::Canvas,
        error::{VectorGridError, VectorGridResult},
    },
    layout::request::LayoutRequest,
    vector::item::VectorSettings,
};

/// Which animation runs, plus its free-form props.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationSelection {
    /// Registry key; unknown keys fall back to `none` at run time.
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub props: Option<Value>,
}

impl Default for AnimationSelection {
    fn default() -> Self {
        Self {
            kind: "none".to_string(),
            props: None,
        }
    }
}

/// Frame clock and output smoothing.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TimingConfig {
    /// Low-pass factor on frame deltas, `(0, 1]`; 1 disables smoothing.
    pub smoothing: f64,
    /// Seconds; larger frame gaps are clamped.
    pub max_delta: f64,
    /// Low-pass factor on displayed angles, `(0, 1]`; 1 disables smoothing.
    pub angle_smoothing: f64,
    /// Degrees; larger per-frame angle changes are limited to this step.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_angle_step: Option<f64>,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            smoothing: DEFAULT_DELTA_SMOOTHING,
            max_delta: DEFAULT_MAX_DELTA,
            angle_smoothing: 1.0,
            max_angle_step: None,
        }
    }
}

impl TimingConfig {
    pub fn validate(&self) -> VectorGridResult<()> {
        if !(self.smoothing.is_finite() && self.smoothing > 0.0 && self.smoothing <= 1.0) {
            return Err(VectorGridError::validation("timing.smoothing must be in (0, 1]"));
        }
        if !(self.max_delta.is_finite() && self.max_delta > 0.0) {
            return Err(VectorGridError::validation("timing.maxDelta must be > 0"));
        }
        if !(self.angle_smoothing.is_finite()
            && self.angle_smoothing > 0.0
            && self.angle_smoothing <= 1.0)
        {
            return Err(VectorGridError::validation(
                "timing.angleSmoothing must be in (0, 1]",
            ));
        }
        if let Some(step) = self.max_angle_step
            && !(step.is_finite() && step > 0.0)
        {
            return Err(VectorGridError::validation("timing.maxAngleStep must be > 0"));
        }
        Ok(())
    }
}

/// One JSON document bundling everything needed to build and run a grid.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneConfig {
    #[serde(default)]
    pub canvas: Canvas,
    pub layout: LayoutRequest,
    #[serde(default)]
    pub vectors: VectorSettings,
    #[serde(default)]
    pub animation: AnimationSelection,
    #[serde(default)]
    pub mouse_influence: MouseInfluence,
    #[serde(default)]
    pub timing: TimingConfig,
}

impl SceneConfig {
    /// Parse and validate a scene document.
    pub fn from_json_str(s: &str) -> VectorGridResult<Self> {
        let scene: Self = serde_json::from_str(s)?;
        scene.validate()?;
        Ok(scene)
    }

    pub fn to_json_pretty(&self) -> VectorGridResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> VectorGridResult<()> {
        Canvas::new(self.canvas.width, self.canvas.height)?;

        let c = self.layout.container();
        if !(c.width.is_finite() && c.height.is_finite() && c.margin.is_finite()) {
            return Err(VectorGridError::layout("container dimensions must be finite"));
        }

        let v = &self.vectors;
        if !(v.length.is_finite() && v.length >= 0.0) {
            return Err(VectorGridError::validation("vectors.length must be >= 0"));
        }
        if !(v.width.is_finite() && v.width >= 0.0) {
            return Err(VectorGridError::validation("vectors.width must be >= 0"));
        }
        if !(v.opacity.is_finite() && (0.0..=1.0).contains(&v.opacity)) {
            return Err(VectorGridError::validation("vectors.opacity must be in [0, 1]"));
        }
        if !v.initial_angle.is_finite() {
            return Err(VectorGridError::validation("vectors.initialAngle must be finite"));
        }

        let m = &self.mouse_influence;
        if !(m.strength.is_finite() && m.strength >= 0.0) {
            return Err(VectorGridError::validation("mouseInfluence.strength must be >= 0"));
        }
        if !(m.radius.is_finite() && m.radius >= 0.0) {
            return Err(VectorGridError::validation("mouseInfluence.radius must be >= 0"));
        }

        if let Some(props) = &self.animation.props
            && !(props.is_object() || props.is_null())
        {
            return Err(VectorGridError::validation(format!(
                "animation props for '{}' must be a JSON object",
                self.animation.kind
            )));
        }

        self.timing.validate()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/scene.rs"]
mod tests;
