use crate::{
    animation::{
        controls::Control,
        impls::{AnimationImpl, FrameContext},
        props::AnimationProps,
    },
    foundation::{
        core::Point,
        error::VectorGridResult,
        math::{angle_between, clamp01, distance, lerp_angle, normalize_degrees},
        params::{ParamBag, canonical_id},
    },
    vector::item::AnimatedVectorItem,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EffectType {
    #[default]
    Attract,
    Repel,
    Align,
}

impl EffectType {
    pub fn parse(s: &str) -> Option<Self> {
        match canonical_id(s).as_str() {
            "attract" => Some(Self::Attract),
            "repel" => Some(Self::Repel),
            "align" => Some(Self::Align),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MouseInteractionProps {
    /// Pixels; vectors farther from the pointer rest.
    pub interaction_radius: f64,
    pub effect_type: EffectType,
    pub strength: f64,
    /// Full influence inside this distance.
    pub attraction_distance: f64,
    /// Influence fades to zero at this distance; `interaction_radius` still cuts off.
    pub repulsion_distance: f64,
    /// Degrees added to the pointer direction in `align` mode.
    pub align_angle_offset: f64,
}

impl Default for MouseInteractionProps {
    fn default() -> Self {
        Self {
            interaction_radius: 150.0,
            effect_type: EffectType::Attract,
            strength: 1.0,
            attraction_distance: 20.0,
            repulsion_distance: 150.0,
            align_angle_offset: 90.0,
        }
    }
}

impl AnimationProps for MouseInteractionProps {
    const CONTROLS: &'static [Control] = &[
        Control::slider("interactionRadius", "Radius", 10.0, 600.0, 5.0),
        Control::select("effectType", "Effect", &["attract", "repel", "align"]),
        Control::slider("strength", "Strength", 0.0, 2.0, 0.05),
        Control::slider("attractionDistance", "Inner distance", 0.0, 300.0, 1.0),
        Control::slider("repulsionDistance", "Outer distance", 0.0, 600.0, 1.0),
        Control::slider("alignAngleOffset", "Align offset", 0.0, 360.0, 1.0),
    ];

    fn from_bag(bag: &ParamBag<'_>) -> Self {
        let d = Self::default();
        Self {
            interaction_radius: bag.f64_or("interactionRadius", d.interaction_radius).max(0.0),
            effect_type: bag
                .str_lower("effectType")
                .and_then(|s| EffectType::parse(&s))
                .unwrap_or(d.effect_type),
            strength: bag.f64_or("strength", d.strength).max(0.0),
            attraction_distance: bag.f64_or("attractionDistance", d.attraction_distance).max(0.0),
            repulsion_distance: bag.f64_or("repulsionDistance", d.repulsion_distance).max(0.0),
            align_angle_offset: bag.f64_or("alignAngleOffset", d.align_angle_offset),
        }
    }
}

impl MouseInteractionProps {
    /// Influence in `[0, 1]` at distance `d` from the pointer.
    fn falloff(&self, d: f64) -> f64 {
        if d > self.interaction_radius {
            return 0.0;
        }
        let inner = self.attraction_distance;
        let outer = self.repulsion_distance;
        let raw = if outer > inner {
            1.0 - clamp01((d - inner) / (outer - inner))
        } else if d <= inner {
            1.0
        } else {
            0.0
        };
        clamp01(raw * self.strength)
    }
}

/// Vectors near the pointer turn toward, away from, or across it.
pub(crate) struct MouseInteraction {
    props: MouseInteractionProps,
}

impl MouseInteraction {
    pub(crate) fn new(props: MouseInteractionProps) -> Self {
        Self { props }
    }
}

impl AnimationImpl for MouseInteraction {
    fn update(
        &mut self,
        _prev: &[AnimatedVectorItem],
        vectors: &mut [AnimatedVectorItem],
        ctx: &mut FrameContext<'_>,
    ) -> VectorGridResult<()> {
        let p = &self.props;
        let mouse = ctx.params.mouse;
        for v in vectors {
            v.reset_to_base();
            let Some(mouse) = mouse else {
                continue;
            };
            let rest = v.rest_position();
            let influence = p.falloff(distance(rest, mouse));
            if influence <= 0.0 {
                continue;
            }
            let toward = angle_between(rest, mouse);
            let target = match p.effect_type {
                EffectType::Attract => toward,
                EffectType::Repel => normalize_degrees(toward + 180.0),
                EffectType::Align => normalize_degrees(toward + p.align_angle_offset),
            };
            v.angle = lerp_angle(v.base_angle, target, influence);
            v.intensity_factor = 1.0 + influence;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VortexProps {
    /// Normalized center used when the pointer is absent or not followed.
    pub center_x: f64,
    pub center_y: f64,
    pub follow_mouse: bool,
    /// Pixels.
    pub radius: f64,
    pub strength: f64,
    /// Degrees per second at the core.
    pub rotation_speed: f64,
    pub clockwise: bool,
}

impl Default for VortexProps {
    fn default() -> Self {
        Self {
            center_x: 0.5,
            center_y: 0.5,
            follow_mouse: true,
            radius: 260.0,
            strength: 1.0,
            rotation_speed: 90.0,
            clockwise: false,
        }
    }
}

impl AnimationProps for VortexProps {
    const CONTROLS: &'static [Control] = &[
        Control::slider("centerX", "Center X", 0.0, 1.0, 0.01),
        Control::slider("centerY", "Center Y", 0.0, 1.0, 0.01),
        Control::toggle("followMouse", "Follow pointer"),
        Control::slider("radius", "Radius", 10.0, 1000.0, 5.0),
        Control::slider("strength", "Strength", 0.0, 2.0, 0.05),
        Control::slider("rotationSpeed", "Rotation speed", 0.0, 720.0, 5.0),
        Control::toggle("clockwise", "Clockwise"),
    ];

    fn from_bag(bag: &ParamBag<'_>) -> Self {
        let d = Self::default();
        Self {
            center_x: bag.f64_in("centerX", d.center_x, 0.0, 1.0),
            center_y: bag.f64_in("centerY", d.center_y, 0.0, 1.0),
            follow_mouse: bag.bool_or("followMouse", d.follow_mouse),
            radius: bag.f64_or("radius", d.radius).max(0.0),
            strength: bag.f64_or("strength", d.strength).max(0.0),
            rotation_speed: bag.f64_or("rotationSpeed", d.rotation_speed),
            clockwise: bag.bool_or("clockwise", d.clockwise),
        }
    }
}

/// Swirl around a center: vectors inside the radius orbit and turn tangent.
///
/// Orbit phase lives in each item's state and relaxes back to zero once the
/// vector leaves the radius.
pub(crate) struct Vortex {
    props: VortexProps,
}

impl Vortex {
    pub(crate) fn new(props: VortexProps) -> Self {
        Self { props }
    }

    fn center(&self, ctx: &FrameContext<'_>) -> Point {
        match ctx.params.mouse {
            Some(m) if self.props.follow_mouse => m,
            _ => ctx.params.denormalize(self.props.center_x, self.props.center_y),
        }
    }
}

impl AnimationImpl for Vortex {
    fn update(
        &mut self,
        _prev: &[AnimatedVectorItem],
        vectors: &mut [AnimatedVectorItem],
        ctx: &mut FrameContext<'_>,
    ) -> VectorGridResult<()> {
        let p = &self.props;
        let center = self.center(ctx);
        let dt = ctx.params.delta_time;
        // Screen space is y-down, so positive degrees already turn clockwise.
        let spin = if p.clockwise { 1.0 } else { -1.0 };

        for v in vectors {
            let rest = v.rest_position();
            let d = distance(rest, center);
            let force = if p.radius > 0.0 && d < p.radius {
                p.strength * (1.0 - d / p.radius)
            } else {
                0.0
            };

            let mut phase = v.state.phase;
            if force > 0.0 {
                phase = normalize_degrees(phase + spin * p.rotation_speed * force * dt);
            } else {
                phase = lerp_angle(phase, 0.0, (3.0 * dt).min(1.0));
            }

            let (sin, cos) = phase.to_radians().sin_cos();
            let rel = rest - center;
            let pos = Point::new(
                center.x + rel.x * cos - rel.y * sin,
                center.y + rel.x * sin + rel.y * cos,
            );

            let tangent = normalize_degrees(angle_between(center, pos) + spin * 90.0);
            let state = v.state;
            v.reset_to_base();
            v.state = state;
            v.state.phase = phase;
            v.x = pos.x;
            v.y = pos.y;
            v.angle = lerp_angle(v.base_angle, tangent, clamp01(force));
        }
        Ok(())
    }
}
