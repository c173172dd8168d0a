use serde_json::Value;

use crate::{
    animation::{
        engine::{AnimationEngine, AnimationParams, FrameOutcome},
        kind::AnimationKind,
        smoothing::{FrameTimer, angular_low_pass, correct_angle_jump},
    },
    config::scene::{SceneConfig, TimingConfig},
    foundation::{
        core::{Canvas, Point},
        error::VectorGridResult,
    },
    layout::{generator::generate_layout, request::LayoutPoint},
    vector::item::{AnimatedVectorItem, VectorSettings, init_vectors},
};

/// Frame driver around [`AnimationEngine`].
///
/// Owns the clock, pause state, pointer position and two vector buffers: `front`
/// is the last published frame, `back` is scratch for the next one. Buffers are
/// swapped only after a successful frame, so a failing animation keeps showing
/// the last good frame.
#[derive(Debug)]
pub struct Animator {
    engine: AnimationEngine,
    canvas: Canvas,
    front: Vec<AnimatedVectorItem>,
    back: Vec<AnimatedVectorItem>,
    kind: AnimationKind,
    props: Option<Value>,
    timing: TimingConfig,
    timer: FrameTimer,
    time: f64,
    mouse: Option<Point>,
    paused: bool,
    frames: u64,
}

impl Animator {
    pub fn new(canvas: Canvas, vectors: Vec<AnimatedVectorItem>) -> Self {
        Self::with_timing(canvas, vectors, TimingConfig::default())
    }

    pub fn with_timing(
        canvas: Canvas,
        vectors: Vec<AnimatedVectorItem>,
        timing: TimingConfig,
    ) -> Self {
        Self {
            engine: AnimationEngine::new(),
            canvas,
            back: Vec::with_capacity(vectors.len()),
            front: vectors,
            kind: AnimationKind::None,
            props: None,
            timer: FrameTimer::new(timing.smoothing, timing.max_delta),
            timing,
            time: 0.0,
            mouse: None,
            paused: false,
            frames: 0,
        }
    }

    /// Build the layout, seed the vectors and select the animation of a scene.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn from_scene(scene: &SceneConfig) -> VectorGridResult<Self> {
        scene.validate()?;
        let canvas = Canvas::new(scene.canvas.width, scene.canvas.height)?;
        let layout = generate_layout(&scene.layout);
        let vectors = init_vectors(&layout.points, &scene.vectors);
        tracing::debug!(points = vectors.len(), kind = %scene.animation.kind, "scene loaded");

        let mut animator = Self::with_timing(canvas, vectors, scene.timing);
        animator.engine.set_mouse_influence(scene.mouse_influence);
        animator.set_animation(&scene.animation.kind, scene.animation.props.clone());
        Ok(animator)
    }

    /// Last published frame.
    pub fn vectors(&self) -> &[AnimatedVectorItem] {
        &self.front
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn set_canvas(&mut self, canvas: Canvas) {
        self.canvas = canvas;
    }

    pub fn engine(&self) -> &AnimationEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut AnimationEngine {
        &mut self.engine
    }

    /// Select an animation by registry key; unknown keys run `none`.
    pub fn set_animation(&mut self, kind: &str, props: Option<Value>) {
        self.kind = self.engine.resolve_kind(kind);
        self.props = props;
    }

    pub fn animation(&self) -> AnimationKind {
        self.kind
    }

    pub fn props(&self) -> Option<&Value> {
        self.props.as_ref()
    }

    pub fn set_mouse(&mut self, mouse: Option<Point>) {
        self.mouse = mouse;
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume without a time jump: the paused span is not counted.
    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            self.timer.rebase();
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Animation time in seconds, excluding paused spans.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Frames published so far.
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Start a pulse at normalized `(x, y)` at the current animation time.
    pub fn trigger_pulse(&mut self, x: f64, y: f64) -> u64 {
        self.engine.trigger_pulse(x, y, self.time)
    }

    /// Replace the vectors, e.g. after a layout change, and restart animation state.
    pub fn reinitialize(&mut self, points: &[LayoutPoint], settings: &VectorSettings) {
        self.front = init_vectors(points, settings);
        self.back.clear();
        self.engine.reset();
        tracing::debug!(points = self.front.len(), "animator reinitialized");
    }

    /// Advance to host time `now` (seconds) and return the current frame.
    ///
    /// While paused the clock is ignored and the last frame is returned.
    pub fn tick(&mut self, now: f64) -> &[AnimatedVectorItem] {
        if self.paused {
            return &self.front;
        }
        let dt = self.timer.tick(now);
        self.advance(dt)
    }

    /// Advance by a fixed `dt` seconds, bypassing the host clock.
    ///
    /// `dt` is clamped to `[0, timing.max_delta]`, like host-clock deltas.
    pub fn step(&mut self, dt: f64) -> &[AnimatedVectorItem] {
        if self.paused {
            return &self.front;
        }
        let dt = if dt.is_finite() {
            dt.clamp(0.0, self.timer.max_delta())
        } else {
            0.0
        };
        self.advance(dt)
    }

    fn advance(&mut self, dt: f64) -> &[AnimatedVectorItem] {
        self.time += dt;
        let params = AnimationParams::new(self.time, dt, self.canvas).with_mouse(self.mouse);
        let outcome = self.engine.update_kind_into(
            &self.front,
            &mut self.back,
            self.kind,
            self.props.as_ref(),
            &params,
        );
        if outcome == FrameOutcome::Updated {
            self.smooth_angles();
            std::mem::swap(&mut self.front, &mut self.back);
            self.frames += 1;
        }
        &self.front
    }

    /// Apply angular low-pass and jump limiting from the front frame to the back frame.
    fn smooth_angles(&mut self) {
        let alpha = self.timing.angle_smoothing;
        let max_step = self.timing.max_angle_step;
        if alpha >= 1.0 && max_step.is_none() {
            return;
        }
        for (next, prev) in self.back.iter_mut().zip(&self.front) {
            let mut angle = next.angle;
            if alpha < 1.0 {
                angle = angular_low_pass(prev.angle, angle, alpha);
            }
            if let Some(step) = max_step {
                angle = correct_angle_jump(prev.angle, angle, step);
            }
            next.angle = angle;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/driver/animator.rs"]
mod tests;
