use std::f64::consts::TAU;

use crate::{
    animation::{
        controls::Control,
        impls::{AnimationImpl, FrameContext},
        props::AnimationProps,
    },
    foundation::{
        error::VectorGridResult,
        math::{distance, normalize_degrees},
        params::{ParamBag, canonical_id},
    },
    vector::item::AnimatedVectorItem,
};

/// Spatial offset used by `smoothWaves`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WaveType {
    /// Distance from the canvas center.
    #[default]
    Circular,
    /// Horizontal position.
    Linear,
    /// Sum of both coordinates.
    Diagonal,
}

impl WaveType {
    pub fn parse(s: &str) -> Option<Self> {
        match canonical_id(s).as_str() {
            "circular" | "radial" => Some(Self::Circular),
            "linear" | "horizontal" => Some(Self::Linear),
            "diagonal" => Some(Self::Diagonal),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SmoothWavesProps {
    pub wave_type: WaveType,
    /// Radians of phase per pixel of offset.
    pub pattern_scale: f64,
    pub frequency: f64,
    pub speed: f64,
    pub time_scale: f64,
    /// Peak swing around the rest angle, degrees.
    pub amplitude: f64,
}

impl Default for SmoothWavesProps {
    fn default() -> Self {
        Self {
            wave_type: WaveType::Circular,
            pattern_scale: 0.01,
            frequency: 1.0,
            speed: 1.0,
            time_scale: 1.0,
            amplitude: 30.0,
        }
    }
}

impl AnimationProps for SmoothWavesProps {
    const CONTROLS: &'static [Control] = &[
        Control::select("waveType", "Wave type", &["circular", "linear", "diagonal"]),
        Control::slider("patternScale", "Pattern scale", 0.001, 0.1, 0.001),
        Control::slider("frequency", "Frequency", 0.1, 10.0, 0.1),
        Control::slider("speed", "Speed", 0.0, 10.0, 0.1),
        Control::slider("timeScale", "Time scale", 0.0, 5.0, 0.05),
        Control::slider("amplitude", "Amplitude", 0.0, 180.0, 1.0),
    ];

    fn from_bag(bag: &ParamBag<'_>) -> Self {
        let d = Self::default();
        Self {
            wave_type: bag
                .str_lower("waveType")
                .and_then(|s| WaveType::parse(&s))
                .unwrap_or(d.wave_type),
            pattern_scale: bag.f64_or("patternScale", d.pattern_scale),
            frequency: bag.f64_or("frequency", d.frequency),
            speed: bag.f64_or("speed", d.speed),
            time_scale: bag.f64_or("timeScale", d.time_scale),
            amplitude: bag.f64_or("amplitude", d.amplitude),
        }
    }
}

/// Sinusoidal swing whose phase depends on position.
pub(crate) struct SmoothWaves {
    props: SmoothWavesProps,
}

impl SmoothWaves {
    pub(crate) fn new(props: SmoothWavesProps) -> Self {
        Self { props }
    }
}

impl AnimationImpl for SmoothWaves {
    fn update(
        &mut self,
        _prev: &[AnimatedVectorItem],
        vectors: &mut [AnimatedVectorItem],
        ctx: &mut FrameContext<'_>,
    ) -> VectorGridResult<()> {
        let p = &self.props;
        let center = ctx.params.center();
        let t = ctx.params.time * p.speed * p.time_scale;
        for v in vectors {
            v.reset_to_base();
            let rest = v.rest_position();
            let offset = match p.wave_type {
                WaveType::Circular => distance(rest, center),
                WaveType::Linear => rest.x,
                WaveType::Diagonal => rest.x + rest.y,
            } * p.pattern_scale;
            let swing = (t + offset * p.frequency).sin();
            v.angle = normalize_degrees(v.base_angle + swing * p.amplitude);
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeaWavesProps {
    /// Peak swing, degrees.
    pub amplitude: f64,
    /// Pixels between crests.
    pub wavelength: f64,
    pub speed: f64,
    /// Travel direction, degrees.
    pub direction: f64,
    /// Second-harmonic weight; sharpens crests.
    pub choppiness: f64,
}

impl Default for SeaWavesProps {
    fn default() -> Self {
        Self {
            amplitude: 35.0,
            wavelength: 220.0,
            speed: 1.0,
            direction: 0.0,
            choppiness: 0.35,
        }
    }
}

impl AnimationProps for SeaWavesProps {
    const CONTROLS: &'static [Control] = &[
        Control::slider("amplitude", "Amplitude", 0.0, 90.0, 1.0),
        Control::slider("wavelength", "Wavelength", 20.0, 1000.0, 5.0),
        Control::slider("speed", "Speed", 0.0, 5.0, 0.05),
        Control::slider("direction", "Direction", 0.0, 360.0, 1.0),
        Control::slider("choppiness", "Choppiness", 0.0, 1.0, 0.01),
    ];

    fn from_bag(bag: &ParamBag<'_>) -> Self {
        let d = Self::default();
        Self {
            amplitude: bag.f64_or("amplitude", d.amplitude),
            wavelength: bag.f64_or("wavelength", d.wavelength).max(1.0),
            speed: bag.f64_or("speed", d.speed),
            direction: normalize_degrees(bag.f64_or("direction", d.direction)),
            choppiness: bag.f64_in("choppiness", d.choppiness, 0.0, 1.0),
        }
    }
}

/// Travelling swell: angle, length and opacity rise and fall with the crest.
pub(crate) struct SeaWaves {
    props: SeaWavesProps,
}

impl SeaWaves {
    pub(crate) fn new(props: SeaWavesProps) -> Self {
        Self { props }
    }
}

impl AnimationImpl for SeaWaves {
    fn update(
        &mut self,
        _prev: &[AnimatedVectorItem],
        vectors: &mut [AnimatedVectorItem],
        ctx: &mut FrameContext<'_>,
    ) -> VectorGridResult<()> {
        let p = &self.props;
        let k = TAU / p.wavelength;
        let (dy, dx) = p.direction.to_radians().sin_cos();
        let omega = p.speed * TAU * 0.25;
        for v in vectors {
            v.reset_to_base();
            let along = v.base_x * dx + v.base_y * dy;
            let phase = k * along - ctx.params.time * omega;
            let swing = (phase.sin() + p.choppiness * (2.0 * phase).sin()) / (1.0 + p.choppiness);
            let crest = 0.5 + 0.5 * phase.cos();
            v.angle = normalize_degrees(v.base_angle + swing * p.amplitude);
            v.length_factor = 0.85 + 0.3 * crest;
            v.apply_factors();
            v.opacity = v.base_opacity * (0.7 + 0.3 * crest);
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectionalFlowProps {
    /// Flow heading, degrees.
    pub direction: f64,
    pub speed: f64,
    /// Peak deviation from the heading, degrees.
    pub turbulence: f64,
    /// Pixels per turbulence cycle.
    pub wavelength: f64,
}

impl Default for DirectionalFlowProps {
    fn default() -> Self {
        Self {
            direction: 0.0,
            speed: 1.0,
            turbulence: 20.0,
            wavelength: 160.0,
        }
    }
}

impl AnimationProps for DirectionalFlowProps {
    const CONTROLS: &'static [Control] = &[
        Control::slider("direction", "Direction", 0.0, 360.0, 1.0),
        Control::slider("speed", "Speed", 0.0, 5.0, 0.05),
        Control::slider("turbulence", "Turbulence", 0.0, 90.0, 1.0),
        Control::slider("wavelength", "Wavelength", 20.0, 1000.0, 5.0),
    ];

    fn from_bag(bag: &ParamBag<'_>) -> Self {
        let d = Self::default();
        Self {
            direction: normalize_degrees(bag.f64_or("direction", d.direction)),
            speed: bag.f64_or("speed", d.speed),
            turbulence: bag.f64_or("turbulence", d.turbulence),
            wavelength: bag.f64_or("wavelength", d.wavelength).max(1.0),
        }
    }
}

/// Vectors follow a shared heading with travelling cross-flow turbulence.
pub(crate) struct DirectionalFlow {
    props: DirectionalFlowProps,
}

impl DirectionalFlow {
    pub(crate) fn new(props: DirectionalFlowProps) -> Self {
        Self { props }
    }
}

impl AnimationImpl for DirectionalFlow {
    fn update(
        &mut self,
        _prev: &[AnimatedVectorItem],
        vectors: &mut [AnimatedVectorItem],
        ctx: &mut FrameContext<'_>,
    ) -> VectorGridResult<()> {
        let p = &self.props;
        let (sin, cos) = p.direction.to_radians().sin_cos();
        let k = TAU / p.wavelength;
        let t = ctx.params.time * p.speed;
        for v in vectors {
            v.reset_to_base();
            let along = v.base_x * cos + v.base_y * sin;
            let across = -v.base_x * sin + v.base_y * cos;
            let wobble = (k * across + t * TAU * 0.5).sin() * (0.5 * k * along - t).cos();
            v.angle = normalize_degrees(p.direction + wobble * p.turbulence);
        }
        Ok(())
    }
}
