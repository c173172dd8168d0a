use noise::{NoiseFn, Perlin};

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
pub struct PerlinFlowProps {
    /// Noise-space units per pixel.
    pub noise_scale: f64,
    /// Noise-space units per second.
    pub time_scale: f64,
    /// Degrees of rotation at full noise amplitude.
    pub strength: f64,
    pub seed: u32,
}

impl Default for PerlinFlowProps {
    fn default() -> Self {
        Self {
            noise_scale: 0.004,
            time_scale: 0.25,
            strength: 180.0,
            seed: 7,
        }
    }
}

impl AnimationProps for PerlinFlowProps {
    const CONTROLS: &'static [Control] = &[
        Control::slider("noiseScale", "Noise scale", 0.0005, 0.05, 0.0005),
        Control::slider("timeScale", "Time scale", 0.0, 2.0, 0.01),
        Control::slider("strength", "Strength", 0.0, 360.0, 1.0),
        Control::slider("seed", "Seed", 0.0, 1000.0, 1.0),
    ];

    fn from_bag(bag: &ParamBag<'_>) -> Self {
        let d = Self::default();
        Self {
            noise_scale: bag.f64_or("noiseScale", d.noise_scale),
            time_scale: bag.f64_or("timeScale", d.time_scale),
            strength: bag.f64_or("strength", d.strength),
            seed: bag.u32_or("seed", d.seed),
        }
    }
}

/// Angles sampled from a 3D Perlin field over (x, y, time).
pub(crate) struct PerlinFlow {
    props: PerlinFlowProps,
    noise: Perlin,
}

impl PerlinFlow {
    pub(crate) fn new(props: PerlinFlowProps) -> Self {
        Self {
            noise: Perlin::new(props.seed),
            props,
        }
    }
}

impl AnimationImpl for PerlinFlow {
    fn update(
        &mut self,
        _prev: &[AnimatedVectorItem],
        vectors: &mut [AnimatedVectorItem],
        ctx: &mut FrameContext<'_>,
    ) -> VectorGridResult<()> {
        let p = &self.props;
        let z = ctx.params.time * p.time_scale;
        for v in vectors {
            v.reset_to_base();
            let n = self
                .noise
                .get([v.base_x * p.noise_scale, v.base_y * p.noise_scale, z]);
            v.angle = normalize_degrees(v.base_angle + n * p.strength);
            v.length_factor = 1.0 + 0.25 * n.abs();
            v.apply_factors();
        }
        Ok(())
    }
}
