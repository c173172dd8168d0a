use serde_json::Value;

use crate::{
    animation::{
        controls::Control,
        engine::{AnimationParams, CustomAnimationFn},
        kind::AnimationKind,
        props::AnimationProps,
        pulse::PulseManager,
    },
    foundation::error::VectorGridResult,
    vector::item::AnimatedVectorItem,
};

mod basic;
mod center_pulse;
mod flocking;
mod interactive;
mod noise_flow;
mod orbital;
mod random_loop;
mod random_walk;
mod waves;

pub use basic::StaticAngleProps;
pub use center_pulse::CenterPulseProps;
pub use flocking::FlockingProps;
pub use interactive::{EffectType, MouseInteractionProps, VortexProps};
pub use noise_flow::PerlinFlowProps;
pub use orbital::LissajousProps;
pub use random_loop::RandomLoopProps;
pub use random_walk::RandomWalkProps;
pub use waves::{DirectionalFlowProps, SeaWavesProps, SmoothWavesProps, WaveType};

/// Mutable engine resources an animation may touch during one frame.
pub(crate) struct FrameContext<'a> {
    pub params: &'a AnimationParams,
    pub pulses: &'a mut PulseManager,
    pub custom: Option<&'a mut CustomAnimationFn>,
}

pub(crate) trait AnimationImpl: Send {
    /// Write the next frame into `vectors`.
    ///
    /// On entry `vectors` is a copy of `prev`. Implementations mutate in place
    /// and never add, remove or reorder items.
    fn update(
        &mut self,
        prev: &[AnimatedVectorItem],
        vectors: &mut [AnimatedVectorItem],
        ctx: &mut FrameContext<'_>,
    ) -> VectorGridResult<()>;
}

pub(crate) fn build(kind: AnimationKind, props: Option<&Value>) -> Box<dyn AnimationImpl> {
    match kind {
        AnimationKind::None => Box::new(basic::NoneAnimation),
        AnimationKind::StaticAngle => {
            Box::new(basic::StaticAngle::new(AnimationProps::from_json(props)))
        }
        AnimationKind::Custom => Box::new(basic::CustomAnimation::new(props.cloned())),
        AnimationKind::RandomLoop => {
            Box::new(random_loop::RandomLoop::new(AnimationProps::from_json(props)))
        }
        AnimationKind::SmoothWaves => {
            Box::new(waves::SmoothWaves::new(AnimationProps::from_json(props)))
        }
        AnimationKind::SeaWaves => Box::new(waves::SeaWaves::new(AnimationProps::from_json(props))),
        AnimationKind::DirectionalFlow => {
            Box::new(waves::DirectionalFlow::new(AnimationProps::from_json(props)))
        }
        AnimationKind::MouseInteraction => {
            Box::new(interactive::MouseInteraction::new(AnimationProps::from_json(props)))
        }
        AnimationKind::Vortex => {
            Box::new(interactive::Vortex::new(AnimationProps::from_json(props)))
        }
        AnimationKind::PerlinFlow => {
            Box::new(noise_flow::PerlinFlow::new(AnimationProps::from_json(props)))
        }
        AnimationKind::CenterPulse => {
            Box::new(center_pulse::CenterPulse::new(AnimationProps::from_json(props)))
        }
        AnimationKind::Lissajous => {
            Box::new(orbital::Lissajous::new(AnimationProps::from_json(props)))
        }
        AnimationKind::Flocking => {
            Box::new(flocking::Flocking::new(AnimationProps::from_json(props)))
        }
        AnimationKind::RandomWalk => {
            Box::new(random_walk::RandomWalk::new(AnimationProps::from_json(props)))
        }
    }
}

pub(crate) fn default_props(kind: AnimationKind) -> Value {
    match kind {
        AnimationKind::None | AnimationKind::Custom => Value::Object(Default::default()),
        AnimationKind::StaticAngle => StaticAngleProps::default().to_json(),
        AnimationKind::RandomLoop => RandomLoopProps::default().to_json(),
        AnimationKind::SmoothWaves => SmoothWavesProps::default().to_json(),
        AnimationKind::SeaWaves => SeaWavesProps::default().to_json(),
        AnimationKind::DirectionalFlow => DirectionalFlowProps::default().to_json(),
        AnimationKind::MouseInteraction => MouseInteractionProps::default().to_json(),
        AnimationKind::Vortex => VortexProps::default().to_json(),
        AnimationKind::PerlinFlow => PerlinFlowProps::default().to_json(),
        AnimationKind::CenterPulse => CenterPulseProps::default().to_json(),
        AnimationKind::Lissajous => LissajousProps::default().to_json(),
        AnimationKind::Flocking => FlockingProps::default().to_json(),
        AnimationKind::RandomWalk => RandomWalkProps::default().to_json(),
    }
}

pub(crate) fn controls(kind: AnimationKind) -> &'static [Control] {
    match kind {
        AnimationKind::None | AnimationKind::Custom => &[],
        AnimationKind::StaticAngle => StaticAngleProps::CONTROLS,
        AnimationKind::RandomLoop => RandomLoopProps::CONTROLS,
        AnimationKind::SmoothWaves => SmoothWavesProps::CONTROLS,
        AnimationKind::SeaWaves => SeaWavesProps::CONTROLS,
        AnimationKind::DirectionalFlow => DirectionalFlowProps::CONTROLS,
        AnimationKind::MouseInteraction => MouseInteractionProps::CONTROLS,
        AnimationKind::Vortex => VortexProps::CONTROLS,
        AnimationKind::PerlinFlow => PerlinFlowProps::CONTROLS,
        AnimationKind::CenterPulse => CenterPulseProps::CONTROLS,
        AnimationKind::Lissajous => LissajousProps::CONTROLS,
        AnimationKind::Flocking => FlockingProps::CONTROLS,
        AnimationKind::RandomWalk => RandomWalkProps::CONTROLS,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/impls.rs"]
mod tests;
