use super::*;
use crate::{
    foundation::error::VectorGridError,
    layout::request::LayoutPoint,
    vector::item::{VectorSettings, init_vectors},
};
use serde_json::json;

fn vectors() -> Vec<AnimatedVectorItem> {
    let pts: Vec<_> = (0..5)
        .map(|i| LayoutPoint::grid(40.0 + 30.0 * f64::from(i), 50.0, 0, i))
        .collect();
    init_vectors(&pts, &VectorSettings::default())
}

fn params(time: f64) -> AnimationParams {
    AnimationParams::new(time, 1.0 / 60.0, Canvas::default())
}

#[test]
fn paused_returns_input_unchanged() {
    let mut engine = AnimationEngine::new();
    let v = vectors();
    let out = engine.update_vectors(&v, "smoothWaves", None, &params(1.0).paused(true));
    assert!(matches!(out, Cow::Borrowed(_)));
    assert_eq!(&*out, v.as_slice());
}

#[test]
fn empty_kind_returns_input_unchanged() {
    let mut engine = AnimationEngine::new();
    let v = vectors();
    let out = engine.update_vectors(&v, "  ", None, &params(1.0));
    assert!(matches!(out, Cow::Borrowed(_)));
}

#[test]
fn unknown_kind_falls_back_to_none() {
    let mut engine = AnimationEngine::new();
    let mut v = vectors();
    v[0].angle = 45.0;
    let unknown = engine
        .update_vectors(&v, "nonexistent-type", None, &params(1.0))
        .into_owned();
    let none = AnimationEngine::new()
        .update_vectors(&v, "none", None, &params(1.0))
        .into_owned();
    assert_eq!(unknown, none);
    assert_eq!(engine.active_kind(), Some(AnimationKind::None));
}

#[test]
fn static_angle_through_engine() {
    let mut engine = AnimationEngine::new();
    let v = vectors();
    let out = engine.update_vectors(&v, "staticAngle", Some(&json!({ "angle": 90 })), &params(0.5));
    assert!(matches!(out, Cow::Owned(_)));
    assert!(out.iter().all(|x| x.angle == 90.0));
    assert!(out.iter().all(|x| x.previous_angle == 0.0));
}

#[test]
fn output_preserves_ids_and_order() {
    let mut engine = AnimationEngine::new();
    let v = vectors();
    for kind in AnimationKind::ALL {
        let out = engine.update_vectors(&v, kind.id(), None, &params(2.0));
        let ids: Vec<_> = out.iter().map(|x| x.id.as_str()).collect();
        let expected: Vec<_> = v.iter().map(|x| x.id.as_str()).collect();
        assert_eq!(ids, expected, "{kind}");
    }
}

#[test]
fn failing_custom_keeps_previous_frame() {
    let mut engine = AnimationEngine::new();
    engine.set_custom(|_, _, _| Err(VectorGridError::animation("boom")));
    let v = vectors();
    for t in 0..3 {
        let out = engine.update_vectors(&v, "custom", None, &params(f64::from(t)));
        assert!(matches!(out, Cow::Borrowed(_)));
    }
}

#[test]
fn panicking_custom_is_contained() {
    let mut engine = AnimationEngine::new();
    engine.set_custom(|_, _, _| panic!("custom animation exploded"));
    let v = vectors();
    let mut out = Vec::new();
    let outcome = engine.update_into(&v, &mut out, "custom", None, &params(1.0));
    assert_eq!(outcome, FrameOutcome::Failed);
    assert_eq!(engine.active_kind(), None);
}

#[test]
fn custom_hook_receives_props() {
    let mut engine = AnimationEngine::new();
    engine.set_custom(|vectors, params, props| {
        let angle = props.get("angle").and_then(serde_json::Value::as_f64).unwrap_or(0.0);
        for v in vectors {
            v.angle = angle + params.time;
        }
        Ok(())
    });
    let v = vectors();
    let out = engine.update_vectors(&v, "custom", Some(&json!({ "angle": 10 })), &params(5.0));
    assert!(out.iter().all(|x| x.angle == 15.0));
}

#[test]
fn non_finite_output_is_replaced() {
    let mut engine = AnimationEngine::new();
    engine.set_custom(|vectors, _, _| {
        for v in vectors {
            v.angle = f64::NAN;
            v.x = f64::INFINITY;
            v.opacity = 7.0;
        }
        Ok(())
    });
    let v = vectors();
    let out = engine.update_vectors(&v, "custom", None, &params(1.0));
    for (a, b) in out.iter().zip(&v) {
        assert_eq!(a.angle, b.angle);
        assert_eq!(a.x, b.x);
        assert_eq!(a.opacity, 1.0);
    }
}

#[test]
fn angles_are_wrapped_into_range() {
    let mut engine = AnimationEngine::new();
    engine.set_custom(|vectors, _, _| {
        for v in vectors {
            v.angle = 725.0;
        }
        Ok(())
    });
    let v = vectors();
    let out = engine.update_vectors(&v, "custom", None, &params(1.0));
    assert!(out.iter().all(|x| (x.angle - 5.0).abs() < 1e-9));
}

#[test]
fn instance_is_rebuilt_when_props_change() {
    let mut engine = AnimationEngine::new();
    let v = vectors();
    let a = engine
        .update_vectors(&v, "staticAngle", Some(&json!({ "angle": 10 })), &params(0.0))
        .into_owned();
    let b = engine
        .update_vectors(&v, "staticAngle", Some(&json!({ "angle": 20 })), &params(0.0))
        .into_owned();
    assert_eq!(a[0].angle, 10.0);
    assert_eq!(b[0].angle, 20.0);
}

#[test]
fn update_into_reuses_buffer() {
    let mut engine = AnimationEngine::new();
    let v = vectors();
    let mut out = vectors();
    out.truncate(2);
    let outcome = engine.update_into(&v, &mut out, "smoothWaves", None, &params(0.3));
    assert_eq!(outcome, FrameOutcome::Updated);
    assert_eq!(out.len(), v.len());
}

#[test]
fn global_mouse_influence_runs_after_animation() {
    let mut engine = AnimationEngine::new();
    engine.set_mouse_influence(MouseInfluence {
        strength: 1.0,
        radius: 1.0e12,
        mode: crate::animation::mouse::InfluenceMode::Attract,
    });
    let v = vectors();
    let p = params(0.0).with_mouse(Some(Point::new(40.0, 150.0)));
    let out = engine.update_vectors(&v, "none", None, &p);
    // The first vector sits straight above the pointer.
    assert!((out[0].angle - 90.0).abs() < 1e-6);
}

#[test]
fn pulses_are_owned_by_engine() {
    let mut engine = AnimationEngine::new();
    engine.trigger_pulse(0.5, 0.5, 0.0);
    assert_eq!(engine.pulses().len(), 1);
    engine.reset();
    assert!(engine.pulses().is_empty());
}
