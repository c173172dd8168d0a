use crate::{
    animation::{
        controls::Control,
        impls::{AnimationImpl, FrameContext},
        props::AnimationProps,
    },
    foundation::{
        error::VectorGridResult,
        math::{Rng64, hash_id, lerp_angle, normalize_degrees},
        params::ParamBag,
    },
    vector::item::AnimatedVectorItem,
};

const MIN_INTERVAL_MS: f64 = 16.0;

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RandomLoopProps {
    /// Milliseconds between target redraws.
    pub interval_ms: f64,
    /// Maximum deviation from the rest angle, degrees.
    pub random_amplitude: f64,
    /// Scales how quickly vectors ease toward their target.
    pub transition_speed_factor: f64,
}

impl Default for RandomLoopProps {
    fn default() -> Self {
        Self {
            interval_ms: 2000.0,
            random_amplitude: 180.0,
            transition_speed_factor: 1.0,
        }
    }
}

impl AnimationProps for RandomLoopProps {
    const CONTROLS: &'static [Control] = &[
        Control::slider("intervalMs", "Interval (ms)", 100.0, 10_000.0, 100.0),
        Control::slider("randomAmplitude", "Amplitude", 0.0, 180.0, 1.0),
        Control::slider("transitionSpeedFactor", "Transition speed", 0.1, 10.0, 0.1),
    ];

    fn from_bag(bag: &ParamBag<'_>) -> Self {
        let d = Self::default();
        Self {
            interval_ms: bag.f64_or("intervalMs", d.interval_ms).max(MIN_INTERVAL_MS),
            random_amplitude: bag.f64_in("randomAmplitude", d.random_amplitude, 0.0, 360.0),
            transition_speed_factor: bag
                .f64_or("transitionSpeedFactor", d.transition_speed_factor)
                .max(0.0),
        }
    }
}

/// Each interval, every vector draws a fresh target angle and eases toward it.
///
/// Targets are a pure function of the vector id and the interval index, so a
/// replay with the same clock gives the same frames.
pub(crate) struct RandomLoop {
    props: RandomLoopProps,
    last_interval: Option<i64>,
}

impl RandomLoop {
    pub(crate) fn new(props: RandomLoopProps) -> Self {
        Self {
            props,
            last_interval: None,
        }
    }

    fn target_for(&self, v: &AnimatedVectorItem, interval: i64) -> f64 {
        let mut rng = Rng64::new(hash_id(&v.id) ^ (interval as u64));
        normalize_degrees(v.base_angle + rng.next_signed() * self.props.random_amplitude)
    }
}

impl AnimationImpl for RandomLoop {
    fn update(
        &mut self,
        _prev: &[AnimatedVectorItem],
        vectors: &mut [AnimatedVectorItem],
        ctx: &mut FrameContext<'_>,
    ) -> VectorGridResult<()> {
        let params = ctx.params;
        let interval = (params.time * 1000.0 / self.props.interval_ms).floor() as i64;
        let redraw = self.last_interval != Some(interval);
        self.last_interval = Some(interval);

        let rate = (2.0 * self.props.transition_speed_factor * params.delta_time).clamp(0.0, 1.0);
        for v in vectors.iter_mut() {
            let target = match v.target_angle {
                Some(t) if !redraw => t,
                _ => self.target_for(v, interval),
            };
            v.target_angle = Some(target);
            v.angle = lerp_angle(v.angle, target, rate);
            v.x = v.base_x;
            v.y = v.base_y;
            v.length = v.base_length;
            v.width = v.base_width;
            v.opacity = v.base_opacity;
        }
        Ok(())
    }
}
