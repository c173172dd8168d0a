use crate::{
    animation::{
        controls::Control,
        impls::{AnimationImpl, FrameContext},
        props::AnimationProps,
    },
    foundation::{
        error::VectorGridResult,
        math::{hash_id, normalize_degrees, value_noise_1d},
        params::ParamBag,
    },
    vector::item::AnimatedVectorItem,
};

const SALT_X: u64 = 0x9E37_79B9_7F4A_7C15;
const SALT_Y: u64 = 0xC2B2_AE3D_27D4_EB4F;
const SALT_ANGLE: u64 = 0x1656_67B1_9E37_79F9;

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RandomWalkProps {
    /// Pixels; the walk never leaves this distance per axis.
    pub max_distance: f64,
    /// Noise cycles per second.
    pub speed: f64,
    /// Peak deviation from the rest angle, degrees.
    pub angle_jitter: f64,
    pub seed: u64,
}

impl Default for RandomWalkProps {
    fn default() -> Self {
        Self {
            max_distance: 24.0,
            speed: 0.6,
            angle_jitter: 35.0,
            seed: 1,
        }
    }
}

impl AnimationProps for RandomWalkProps {
    const CONTROLS: &'static [Control] = &[
        Control::slider("maxDistance", "Max distance", 0.0, 200.0, 1.0),
        Control::slider("speed", "Speed", 0.0, 5.0, 0.05),
        Control::slider("angleJitter", "Angle jitter", 0.0, 180.0, 1.0),
        Control::slider("seed", "Seed", 0.0, 1000.0, 1.0),
    ];

    fn from_bag(bag: &ParamBag<'_>) -> Self {
        let d = Self::default();
        Self {
            max_distance: bag.f64_or("maxDistance", d.max_distance).max(0.0),
            speed: bag.f64_or("speed", d.speed),
            angle_jitter: bag.f64_or("angleJitter", d.angle_jitter),
            seed: bag.u64_or("seed", d.seed),
        }
    }
}

/// Smooth bounded wander around the rest position, driven by per-vector value
/// noise. Frames are a pure function of id, seed and time.
pub(crate) struct RandomWalk {
    props: RandomWalkProps,
}

impl RandomWalk {
    pub(crate) fn new(props: RandomWalkProps) -> Self {
        Self { props }
    }
}

impl AnimationImpl for RandomWalk {
    fn update(
        &mut self,
        _prev: &[AnimatedVectorItem],
        vectors: &mut [AnimatedVectorItem],
        ctx: &mut FrameContext<'_>,
    ) -> VectorGridResult<()> {
        let p = &self.props;
        let x = ctx.params.time * p.speed;
        for v in vectors {
            v.reset_to_base();
            let seed = hash_id(&v.id) ^ p.seed.wrapping_mul(SALT_X);
            v.x = v.base_x + p.max_distance * value_noise_1d(seed ^ SALT_X, x);
            v.y = v.base_y + p.max_distance * value_noise_1d(seed ^ SALT_Y, x + 17.0);
            v.angle = normalize_degrees(
                v.base_angle + p.angle_jitter * value_noise_1d(seed ^ SALT_ANGLE, x + 31.0),
            );
        }
        Ok(())
    }
}
