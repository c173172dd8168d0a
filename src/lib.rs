//! vectorgrid computes layouts and per-frame motion for grids of oriented vector glyphs.
//!
//! The crate has two halves:
//!
//! - [`generate_layout`] turns a [`LayoutRequest`] (an explicit `rows x cols` grid or a
//!   counted mathematical pattern) into centered [`LayoutPoint`]s.
//! - [`AnimationEngine`] advances an array of [`AnimatedVectorItem`]s by one frame under
//!   a named animation, and [`Animator`] drives it from a host clock with pause/resume
//!   and double-buffered frames.
//!
//! Rendering is left to the host: frames are plain data that serialize to JSON.
#![forbid(unsafe_code)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod config;
pub(crate) mod driver;
pub(crate) mod layout;
pub(crate) mod spatial;
pub(crate) mod vector;

pub use crate::foundation::core::{Canvas, Container, Point, Rect, Vec2};
pub use crate::foundation::error::{VectorGridError, VectorGridResult};
pub use crate::foundation::math;
pub use crate::foundation::params::{ParamBag, canonical_id};

pub use crate::animation::controls::{Control, ControlKind};
pub use crate::animation::ease::Ease;
pub use crate::animation::engine::{
    AnimationEngine, AnimationParams, CustomAnimationFn, FrameOutcome,
};
pub use crate::animation::impls::{
    CenterPulseProps, DirectionalFlowProps, EffectType, FlockingProps, LissajousProps,
    MouseInteractionProps, PerlinFlowProps, RandomLoopProps, RandomWalkProps, SeaWavesProps,
    SmoothWavesProps, StaticAngleProps, VortexProps, WaveType,
};
pub use crate::animation::kind::AnimationKind;
pub use crate::animation::mouse::{InfluenceMode, MouseInfluence};
pub use crate::animation::props::AnimationProps;
pub use crate::animation::pulse::{DEFAULT_PULSE_CAPACITY, Pulse, PulseManager};
pub use crate::animation::smoothing::{
    DEFAULT_DELTA_SMOOTHING, DEFAULT_MAX_DELTA, FrameTimer, LowPass, angular_low_pass,
    correct_angle_jump,
};
pub use crate::config::scene::{AnimationSelection, SceneConfig, TimingConfig};
pub use crate::driver::animator::Animator;
pub use crate::layout::generator::{PatternKind, center_points, generate_layout};
pub use crate::layout::request::{
    BasicLayout, BasicPattern, LayoutPoint, LayoutRequest, LayoutResult, MathLayout,
};
pub use crate::spatial::grid_index::SpatialGrid;
pub use crate::vector::item::{
    AnimatedVectorItem, AnimationState, RotationOrigin, VectorSettings, init_vectors,
};
