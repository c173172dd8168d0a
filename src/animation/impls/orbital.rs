use crate::{
    animation::{
        controls::Control,
        impls::{AnimationImpl, FrameContext},
        props::AnimationProps,
    },
    foundation::{error::VectorGridResult, math::normalize_degrees, params::ParamBag},
    vector::item::AnimatedVectorItem,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LissajousProps {
    pub freq_x: f64,
    pub freq_y: f64,
    /// Degrees between the two axes.
    pub phase: f64,
    /// Pixels of travel from the rest position.
    pub amplitude: f64,
    pub speed: f64,
    /// Radians of phase per pixel, so neighbors trace offset curves.
    pub spatial_phase: f64,
}

impl Default for LissajousProps {
    fn default() -> Self {
        Self {
            freq_x: 3.0,
            freq_y: 2.0,
            phase: 90.0,
            amplitude: 18.0,
            speed: 1.0,
            spatial_phase: 0.01,
        }
    }
}

impl AnimationProps for LissajousProps {
    const CONTROLS: &'static [Control] = &[
        Control::slider("freqX", "Frequency X", 0.0, 10.0, 0.1),
        Control::slider("freqY", "Frequency Y", 0.0, 10.0, 0.1),
        Control::slider("phase", "Phase", 0.0, 360.0, 1.0),
        Control::slider("amplitude", "Amplitude", 0.0, 100.0, 1.0),
        Control::slider("speed", "Speed", 0.0, 5.0, 0.05),
        Control::slider("spatialPhase", "Spatial phase", 0.0, 0.1, 0.001),
    ];

    fn from_bag(bag: &ParamBag<'_>) -> Self {
        let d = Self::default();
        Self {
            freq_x: bag.f64_or("freqX", d.freq_x),
            freq_y: bag.f64_or("freqY", d.freq_y),
            phase: bag.f64_or("phase", d.phase),
            amplitude: bag.f64_or("amplitude", d.amplitude).max(0.0),
            speed: bag.f64_or("speed", d.speed),
            spatial_phase: bag.f64_or("spatialPhase", d.spatial_phase),
        }
    }
}

/// Each vector traces a Lissajous curve around its rest position and points
/// along its direction of travel.
pub(crate) struct Lissajous {
    props: LissajousProps,
}

impl Lissajous {
    pub(crate) fn new(props: LissajousProps) -> Self {
        Self { props }
    }
}

impl AnimationImpl for Lissajous {
    fn update(
        &mut self,
        _prev: &[AnimatedVectorItem],
        vectors: &mut [AnimatedVectorItem],
        ctx: &mut FrameContext<'_>,
    ) -> VectorGridResult<()> {
        let p = &self.props;
        let phase = p.phase.to_radians();
        for v in vectors {
            v.reset_to_base();
            let t = ctx.params.time * p.speed + (v.base_x + v.base_y) * p.spatial_phase;
            let ax = p.freq_x * t + phase;
            let ay = p.freq_y * t;
            v.x = v.base_x + p.amplitude * ax.sin();
            v.y = v.base_y + p.amplitude * ay.sin();

            let vx = p.amplitude * p.freq_x * ax.cos();
            let vy = p.amplitude * p.freq_y * ay.cos();
            if vx.hypot(vy) > 1e-9 {
                v.angle = normalize_degrees(vy.atan2(vx).to_degrees());
            }
        }
        Ok(())
    }
}
