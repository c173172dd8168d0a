use crate::{
    animation::{
        controls::Control,
        ease::Ease,
        impls::{AnimationImpl, FrameContext},
        props::AnimationProps,
        pulse::Pulse,
    },
    foundation::{
        core::Vec2,
        error::VectorGridResult,
        math::{distance, normalize_degrees},
        params::ParamBag,
    },
    vector::item::AnimatedVectorItem,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CenterPulseProps {
    /// Wavefront speed, pixels per second.
    pub pulse_speed: f64,
    /// Pixels; thickness of the ring that displaces vectors.
    pub pulse_width: f64,
    /// Pixels of outward push at the ring's core.
    pub max_displacement: f64,
    /// Seconds a pulse stays alive.
    pub pulse_duration: f64,
    /// Seconds between automatic pulses from the canvas center; 0 disables them.
    pub auto_interval: f64,
    /// Curve applied to the strength decay over a pulse's life.
    pub decay: Ease,
}

impl Default for CenterPulseProps {
    fn default() -> Self {
        Self {
            pulse_speed: 320.0,
            pulse_width: 90.0,
            max_displacement: 14.0,
            pulse_duration: 2.5,
            auto_interval: 3.0,
            decay: Ease::OutQuad,
        }
    }
}

impl AnimationProps for CenterPulseProps {
    const CONTROLS: &'static [Control] = &[
        Control::slider("pulseSpeed", "Speed", 10.0, 2000.0, 10.0),
        Control::slider("pulseWidth", "Width", 5.0, 400.0, 1.0),
        Control::slider("maxDisplacement", "Displacement", 0.0, 100.0, 1.0),
        Control::slider("pulseDuration", "Duration (s)", 0.1, 10.0, 0.1),
        Control::slider("autoInterval", "Auto interval (s)", 0.0, 10.0, 0.1),
        Control::select(
            "decay",
            "Decay",
            &["linear", "inQuad", "outQuad", "inOutQuad", "inCubic", "outCubic", "inOutCubic"],
        ),
    ];

    fn from_bag(bag: &ParamBag<'_>) -> Self {
        let d = Self::default();
        Self {
            pulse_speed: bag.f64_or("pulseSpeed", d.pulse_speed).max(0.0),
            pulse_width: bag.f64_or("pulseWidth", d.pulse_width).max(1.0),
            max_displacement: bag.f64_or("maxDisplacement", d.max_displacement),
            pulse_duration: bag.f64_or("pulseDuration", d.pulse_duration).max(0.01),
            auto_interval: bag.f64_or("autoInterval", d.auto_interval).max(0.0),
            decay: bag
                .str_lower("decay")
                .and_then(|s| Ease::parse(&s))
                .unwrap_or(d.decay),
        }
    }
}

/// Expanding rings push vectors outward and turn them radially as they pass.
///
/// Pulses come from the engine's pulse manager, either triggered by the host or
/// started here every `autoInterval` seconds at the canvas center.
pub(crate) struct CenterPulse {
    props: CenterPulseProps,
    last_auto: Option<f64>,
    active: Vec<Pulse>,
}

impl CenterPulse {
    pub(crate) fn new(props: CenterPulseProps) -> Self {
        Self {
            props,
            last_auto: None,
            active: Vec::new(),
        }
    }

    fn maybe_auto_trigger(&mut self, ctx: &mut FrameContext<'_>) {
        let interval = self.props.auto_interval;
        if interval <= 0.0 {
            return;
        }
        let now = ctx.params.time;
        let due = match self.last_auto {
            Some(last) if now >= last => now - last >= interval,
            _ => true,
        };
        if due {
            ctx.pulses.trigger_pulse(0.5, 0.5, now);
            self.last_auto = Some(now);
        }
    }
}

impl AnimationImpl for CenterPulse {
    fn update(
        &mut self,
        _prev: &[AnimatedVectorItem],
        vectors: &mut [AnimatedVectorItem],
        ctx: &mut FrameContext<'_>,
    ) -> VectorGridResult<()> {
        let now = ctx.params.time;
        let duration = self.props.pulse_duration;
        ctx.pulses.update_pulses(now, duration);
        self.maybe_auto_trigger(ctx);

        self.active.clear();
        self.active
            .extend(ctx.pulses.active_pulses(now, duration).copied());

        let reach = ctx.params.diagonal() + self.props.pulse_width;
        for pulse in &self.active {
            if pulse.elapsed(now) * self.props.pulse_speed > reach {
                ctx.pulses.mark_max_reached(pulse.id);
            }
        }

        let p = &self.props;
        let half = p.pulse_width * 0.5;
        for v in vectors {
            v.reset_to_base();
            let rest = v.rest_position();
            let mut push = Vec2::ZERO;
            let mut best = 0.0_f64;
            let mut best_angle = v.base_angle;

            for pulse in &self.active {
                let elapsed = pulse.elapsed(now);
                let center = ctx.params.denormalize(pulse.center_x, pulse.center_y);
                let d = distance(rest, center);
                let gap = (d - elapsed * p.pulse_speed).abs();
                if gap >= half {
                    continue;
                }
                let proximity = 1.0 - gap / half;
                let weight = proximity * (1.0 - p.decay.apply(elapsed / duration));
                if weight <= 0.0 || d <= 1e-9 {
                    continue;
                }
                let dir = (rest - center) / d;
                push += dir * (p.max_displacement * weight);
                if weight > best {
                    best = weight;
                    best_angle = normalize_degrees(dir.atan2().to_degrees());
                }
            }

            v.x += push.x;
            v.y += push.y;
            if best > 0.0 {
                v.angle = best_angle;
                v.length_factor = 1.0 + 0.5 * best;
                v.apply_factors();
            }
        }
        Ok(())
    }
}
