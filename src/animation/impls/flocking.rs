use crate::{
    animation::{
        controls::Control,
        impls::{AnimationImpl, FrameContext},
        props::AnimationProps,
    },
    foundation::{
        core::Vec2,
        error::VectorGridResult,
        math::normalize_degrees,
        params::ParamBag,
    },
    spatial::grid_index::SpatialGrid,
    vector::item::AnimatedVectorItem,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlockingProps {
    /// Pixels; neighbors farther away are ignored.
    pub perception_radius: f64,
    pub separation_weight: f64,
    pub alignment_weight: f64,
    pub cohesion_weight: f64,
    /// Pixels per second.
    pub max_speed: f64,
    /// Pixels per second squared.
    pub max_force: f64,
    /// Spring constant pulling each vector back toward its rest position.
    pub tether: f64,
    /// Pixels; hard cap on distance from the rest position.
    pub max_distance: f64,
}

impl Default for FlockingProps {
    fn default() -> Self {
        Self {
            perception_radius: 60.0,
            separation_weight: 1.5,
            alignment_weight: 1.0,
            cohesion_weight: 0.8,
            max_speed: 80.0,
            max_force: 240.0,
            tether: 2.0,
            max_distance: 40.0,
        }
    }
}

impl AnimationProps for FlockingProps {
    const CONTROLS: &'static [Control] = &[
        Control::slider("perceptionRadius", "Perception", 5.0, 300.0, 1.0),
        Control::slider("separationWeight", "Separation", 0.0, 5.0, 0.05),
        Control::slider("alignmentWeight", "Alignment", 0.0, 5.0, 0.05),
        Control::slider("cohesionWeight", "Cohesion", 0.0, 5.0, 0.05),
        Control::slider("maxSpeed", "Max speed", 1.0, 500.0, 1.0),
        Control::slider("maxForce", "Max force", 1.0, 2000.0, 1.0),
        Control::slider("tether", "Tether", 0.0, 20.0, 0.1),
        Control::slider("maxDistance", "Max distance", 0.0, 400.0, 1.0),
    ];

    fn from_bag(bag: &ParamBag<'_>) -> Self {
        let d = Self::default();
        Self {
            perception_radius: bag.f64_or("perceptionRadius", d.perception_radius).max(1.0),
            separation_weight: bag.f64_or("separationWeight", d.separation_weight),
            alignment_weight: bag.f64_or("alignmentWeight", d.alignment_weight),
            cohesion_weight: bag.f64_or("cohesionWeight", d.cohesion_weight),
            max_speed: bag.f64_or("maxSpeed", d.max_speed).max(0.0),
            max_force: bag.f64_or("maxForce", d.max_force).max(0.0),
            tether: bag.f64_or("tether", d.tether).max(0.0),
            max_distance: bag.f64_or("maxDistance", d.max_distance).max(0.0),
        }
    }
}

fn limit(v: Vec2, max: f64) -> Vec2 {
    let len = v.hypot();
    if len > max && len > 0.0 { v * (max / len) } else { v }
}

fn with_length(v: Vec2, len: f64) -> Vec2 {
    let cur = v.hypot();
    if cur > 1e-12 { v * (len / cur) } else { Vec2::ZERO }
}

/// Boids steering among vectors of the same flock, tethered to rest positions.
///
/// Neighbors are read from the previous frame and looked up through a spatial
/// grid rebuilt every frame, so updates do not depend on iteration order.
pub(crate) struct Flocking {
    props: FlockingProps,
    grid: SpatialGrid,
}

impl Flocking {
    pub(crate) fn new(props: FlockingProps) -> Self {
        Self {
            grid: SpatialGrid::new(props.perception_radius),
            props,
        }
    }
}

impl AnimationImpl for Flocking {
    fn update(
        &mut self,
        prev: &[AnimatedVectorItem],
        vectors: &mut [AnimatedVectorItem],
        ctx: &mut FrameContext<'_>,
    ) -> VectorGridResult<()> {
        let p = &self.props;
        let dt = ctx.params.delta_time;
        self.grid.rebuild(prev.iter().map(AnimatedVectorItem::position));

        for (i, (me, out)) in prev.iter().zip(vectors.iter_mut()).enumerate() {
            let pos = me.position();
            let rest = me.rest_position();
            let mut vel = Vec2::new(me.state.vx, me.state.vy);
            if vel.hypot() <= 1e-9 {
                vel = Vec2::from_angle(me.base_angle.to_radians()) * (p.max_speed * 0.25);
            }

            let mut separation = Vec2::ZERO;
            let mut heading = Vec2::ZERO;
            let mut centre = Vec2::ZERO;
            let mut count = 0usize;
            self.grid.for_each_within(pos, p.perception_radius, |j, other| {
                if j == i || prev[j].flock_id != me.flock_id {
                    return;
                }
                let offset = pos - other;
                let d = offset.hypot();
                if d <= 1e-9 {
                    return;
                }
                separation += offset / (d * d);
                heading += Vec2::new(prev[j].state.vx, prev[j].state.vy);
                centre += other.to_vec2();
                count += 1;
            });

            let mut steering = Vec2::ZERO;
            if count > 0 {
                let n = count as f64;
                let steer = |desired: Vec2| {
                    if desired.hypot() <= 1e-12 {
                        Vec2::ZERO
                    } else {
                        limit(with_length(desired, p.max_speed) - vel, p.max_force)
                    }
                };
                steering += steer(separation / n) * p.separation_weight;
                steering += steer(heading / n) * p.alignment_weight;
                steering += steer(centre / n - pos.to_vec2()) * p.cohesion_weight;
            }
            steering += (rest - pos) * p.tether;
            steering = limit(steering, p.max_force);

            vel = limit(vel + steering * dt, p.max_speed);
            let mut next = pos + vel * dt;
            let drift = next - rest;
            if drift.hypot() > p.max_distance {
                next = rest + with_length(drift, p.max_distance);
                vel = vel * 0.5;
            }

            let state = me.state;
            out.reset_to_base();
            out.state = state;
            out.state.vx = vel.x;
            out.state.vy = vel.y;
            out.x = next.x;
            out.y = next.y;
            if vel.hypot() > 1e-6 {
                out.angle = normalize_degrees(vel.atan2().to_degrees());
            }
        }
        Ok(())
    }
}
