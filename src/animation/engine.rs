use std::{
    borrow::Cow,
    panic::{self, AssertUnwindSafe},
};

use serde_json::Value;

use crate::{
    animation::{
        impls::{self, AnimationImpl, FrameContext},
        kind::AnimationKind,
        mouse::MouseInfluence,
        pulse::PulseManager,
    },
    foundation::{
        core::{Canvas, Point},
        error::VectorGridResult,
        math::normalize_degrees,
    },
    vector::item::AnimatedVectorItem,
};

/// Per-frame inputs shared by every animation.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationParams {
    /// Seconds since the animation started, excluding paused spans.
    pub time: f64,
    /// Smoothed frame delta in seconds.
    pub delta_time: f64,
    pub canvas_width: f64,
    pub canvas_height: f64,
    #[serde(default)]
    pub mouse: Option<Point>,
    #[serde(default)]
    pub is_paused: bool,
}

impl AnimationParams {
    pub fn new(time: f64, delta_time: f64, canvas: Canvas) -> Self {
        Self {
            time,
            delta_time,
            canvas_width: canvas.width,
            canvas_height: canvas.height,
            mouse: None,
            is_paused: false,
        }
    }

    pub fn with_mouse(mut self, mouse: Option<Point>) -> Self {
        self.mouse = mouse;
        self
    }

    pub fn paused(mut self, is_paused: bool) -> Self {
        self.is_paused = is_paused;
        self
    }

    pub fn center(&self) -> Point {
        Point::new(self.canvas_width * 0.5, self.canvas_height * 0.5)
    }

    pub fn diagonal(&self) -> f64 {
        self.canvas_width.hypot(self.canvas_height)
    }

    /// Map a normalized `0..1` coordinate pair into canvas pixels.
    pub fn denormalize(&self, nx: f64, ny: f64) -> Point {
        Point::new(nx * self.canvas_width, ny * self.canvas_height)
    }

    fn sanitized(&self) -> Self {
        let finite_or_zero = |v: f64| if v.is_finite() { v } else { 0.0 };
        Self {
            time: finite_or_zero(self.time),
            delta_time: finite_or_zero(self.delta_time).max(0.0),
            canvas_width: finite_or_zero(self.canvas_width).max(0.0),
            canvas_height: finite_or_zero(self.canvas_height).max(0.0),
            mouse: self.mouse.filter(|m| m.x.is_finite() && m.y.is_finite()),
            is_paused: self.is_paused,
        }
    }
}

/// Host-supplied behavior for the `custom` animation.
///
/// Receives the working copy of the frame, the frame params and the props the
/// caller passed. Returning an error keeps the previous frame.
pub type CustomAnimationFn = Box<
    dyn FnMut(&mut [AnimatedVectorItem], &AnimationParams, &Value) -> VectorGridResult<()> + Send,
>;

/// What [`AnimationEngine::update_into`] did with the output buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Paused or no animation selected; the output buffer was not written.
    Unchanged,
    /// The output buffer holds the new frame.
    Updated,
    /// The animation failed; the output buffer is unspecified and the previous
    /// frame should be kept.
    Failed,
}

struct ActiveAnimation {
    kind: AnimationKind,
    props: Option<Value>,
    imp: Box<dyn AnimationImpl>,
}

/// Dispatches one frame update to the selected animation.
///
/// The engine caches the active animation instance, keyed by kind and props, so
/// stateful animations keep their state between frames. Changing either rebuilds
/// it. Failures inside an animation never escape: they are logged and the
/// previous frame is kept.
pub struct AnimationEngine {
    active: Option<ActiveAnimation>,
    pulses: PulseManager,
    mouse_influence: MouseInfluence,
    custom: Option<CustomAnimationFn>,
    last_unknown: Option<String>,
}

impl std::fmt::Debug for AnimationEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimationEngine")
            .field("active", &self.active.as_ref().map(|a| a.kind))
            .field("pulses", &self.pulses)
            .field("mouse_influence", &self.mouse_influence)
            .field("custom", &self.custom.is_some())
            .finish()
    }
}

impl Default for AnimationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationEngine {
    pub fn new() -> Self {
        Self {
            active: None,
            pulses: PulseManager::new(),
            mouse_influence: MouseInfluence::default(),
            custom: None,
            last_unknown: None,
        }
    }

    /// Install the behavior run by the `custom` animation.
    pub fn set_custom<F>(&mut self, f: F)
    where
        F: FnMut(&mut [AnimatedVectorItem], &AnimationParams, &Value) -> VectorGridResult<()>
            + Send
            + 'static,
    {
        self.custom = Some(Box::new(f));
    }

    pub fn clear_custom(&mut self) {
        self.custom = None;
    }

    pub fn mouse_influence(&self) -> MouseInfluence {
        self.mouse_influence
    }

    pub fn set_mouse_influence(&mut self, influence: MouseInfluence) {
        self.mouse_influence = influence;
    }

    pub fn pulses(&self) -> &PulseManager {
        &self.pulses
    }

    /// Start a pulse at normalized `(x, y)`, consumed by `centerPulse`.
    pub fn trigger_pulse(&mut self, x: f64, y: f64, time: f64) -> u64 {
        self.pulses.trigger_pulse(x, y, time)
    }

    pub fn clear_pulses(&mut self) {
        self.pulses.clear_pulses();
    }

    /// Kind of the cached instance, if any frame has run.
    pub fn active_kind(&self) -> Option<AnimationKind> {
        self.active.as_ref().map(|a| a.kind)
    }

    /// Drop the cached instance and all pulses; the next frame starts fresh.
    pub fn reset(&mut self) {
        self.active = None;
        self.pulses.clear_pulses();
    }

    /// Resolve a registry key, falling back to `none` with a warning.
    ///
    /// The warning is emitted once per run of the same unknown key.
    pub fn resolve_kind(&mut self, kind: &str) -> AnimationKind {
        match AnimationKind::parse(kind) {
            Ok(k) => {
                self.last_unknown = None;
                k
            }
            Err(err) => {
                if self.last_unknown.as_deref() != Some(kind) {
                    tracing::warn!(%err, "falling back to 'none'");
                    self.last_unknown = Some(kind.to_string());
                }
                AnimationKind::None
            }
        }
    }

    /// Compute the next frame from `vectors`.
    ///
    /// Returns the input untouched when paused, when `kind` is empty, or when the
    /// animation fails; otherwise a new array of the same length and ids.
    pub fn update_vectors<'a>(
        &mut self,
        vectors: &'a [AnimatedVectorItem],
        kind: &str,
        props: Option<&Value>,
        params: &AnimationParams,
    ) -> Cow<'a, [AnimatedVectorItem]> {
        let mut out = Vec::with_capacity(vectors.len());
        match self.update_into(vectors, &mut out, kind, props, params) {
            FrameOutcome::Updated => Cow::Owned(out),
            FrameOutcome::Unchanged | FrameOutcome::Failed => Cow::Borrowed(vectors),
        }
    }

    /// Buffer-reusing form of [`AnimationEngine::update_vectors`].
    pub fn update_into(
        &mut self,
        prev: &[AnimatedVectorItem],
        out: &mut Vec<AnimatedVectorItem>,
        kind: &str,
        props: Option<&Value>,
        params: &AnimationParams,
    ) -> FrameOutcome {
        if params.is_paused || kind.trim().is_empty() {
            return FrameOutcome::Unchanged;
        }
        let kind = self.resolve_kind(kind);
        self.update_kind_into(prev, out, kind, props, params)
    }

    #[tracing::instrument(
        level = "trace",
        skip(self, prev, out, props, params),
        fields(n = prev.len())
    )]
    pub fn update_kind_into(
        &mut self,
        prev: &[AnimatedVectorItem],
        out: &mut Vec<AnimatedVectorItem>,
        kind: AnimationKind,
        props: Option<&Value>,
        params: &AnimationParams,
    ) -> FrameOutcome {
        if params.is_paused {
            return FrameOutcome::Unchanged;
        }
        let params = params.sanitized();
        self.ensure_active(kind, props);

        copy_frame(prev, out);
        for v in out.iter_mut() {
            v.previous_angle = v.angle;
        }

        let Self {
            active,
            pulses,
            custom,
            mouse_influence,
            ..
        } = &mut *self;
        let Some(active) = active.as_mut() else {
            return FrameOutcome::Failed;
        };

        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let mut ctx = FrameContext {
                params: &params,
                pulses,
                custom: custom.as_mut(),
            };
            active.imp.update(prev, out, &mut ctx)
        }));

        match result {
            Ok(Ok(())) => {
                sanitize_frame(prev, out);
                mouse_influence.apply(out, params.mouse);
                FrameOutcome::Updated
            }
            Ok(Err(err)) => {
                tracing::error!(
                    kind = %kind,
                    %err,
                    "animation update failed, keeping previous frame"
                );
                FrameOutcome::Failed
            }
            Err(payload) => {
                tracing::error!(
                    kind = %kind,
                    panic = %panic_message(payload.as_ref()),
                    "animation panicked, keeping previous frame"
                );
                self.active = None;
                FrameOutcome::Failed
            }
        }
    }

    fn ensure_active(&mut self, kind: AnimationKind, props: Option<&Value>) {
        let stale = match &self.active {
            Some(a) => a.kind != kind || a.props.as_ref() != props,
            None => true,
        };
        if stale {
            tracing::debug!(kind = %kind, "building animation instance");
            self.active = Some(ActiveAnimation {
                kind,
                props: props.cloned(),
                imp: impls::build(kind, props),
            });
        }
    }
}

/// Make `out` an element-wise copy of `prev`, reusing existing allocations.
fn copy_frame(prev: &[AnimatedVectorItem], out: &mut Vec<AnimatedVectorItem>) {
    out.truncate(prev.len());
    let n = out.len();
    out[..n].clone_from_slice(&prev[..n]);
    out.extend_from_slice(&prev[n..]);
}

/// Replace non-finite displayed values with the previous frame's and bring
/// angles and opacity back into range.
fn sanitize_frame(prev: &[AnimatedVectorItem], out: &mut [AnimatedVectorItem]) {
    for (v, p) in out.iter_mut().zip(prev) {
        let keep = |new: f64, old: f64| if new.is_finite() { new } else { old };
        v.x = keep(v.x, p.x);
        v.y = keep(v.y, p.y);
        v.angle = normalize_degrees(keep(v.angle, p.angle));
        v.length = keep(v.length, p.length).max(0.0);
        v.width = keep(v.width, p.width).max(0.0);
        v.opacity = keep(v.opacity, p.opacity).clamp(0.0, 1.0);
        if let Some(t) = v.target_angle {
            v.target_angle = t.is_finite().then(|| normalize_degrees(t));
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/engine.rs"]
mod tests;
