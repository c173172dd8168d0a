use super::*;

#[test]
fn low_pass_converges() {
    let mut f = LowPass::new(0.5);
    assert_eq!(f.update(10.0), 10.0);
    assert_eq!(f.update(0.0), 5.0);
    assert_eq!(f.update(0.0), 2.5);
    assert_eq!(f.update(f64::NAN), 2.5);
    f.reset();
    assert_eq!(f.value(), None);
}

#[test]
fn frame_timer_first_tick_is_zero() {
    let mut t = FrameTimer::default();
    assert_eq!(t.tick(12.0), 0.0);
    let dt = t.tick(12.016);
    assert!((dt - 0.016).abs() < 1e-9);
}

#[test]
fn frame_timer_clamps_long_gaps() {
    let mut t = FrameTimer::new(1.0, 0.1);
    t.tick(0.0);
    t.tick(0.016);
    let after_gap = t.tick(30.0);
    assert!(after_gap <= 0.1 + 1e-12);
    assert!(after_gap > 0.0);
}

#[test]
fn frame_timer_smooths_spikes() {
    let mut t = FrameTimer::new(0.2, 0.1);
    t.tick(0.0);
    let base = t.tick(0.016);
    let spike = t.tick(0.016 + 0.08);
    assert!(spike > base);
    assert!(spike < 0.08);
}

#[test]
fn frame_timer_ignores_backwards_clock() {
    let mut t = FrameTimer::new(1.0, 0.1);
    t.tick(5.0);
    t.tick(5.02);
    assert_eq!(t.tick(1.0), 0.0);
}

#[test]
fn rebase_hides_the_gap() {
    let mut t = FrameTimer::new(1.0, 0.1);
    t.tick(0.0);
    t.tick(0.02);
    t.rebase();
    assert_eq!(t.tick(100.0), 0.0);
}

#[test]
fn angle_jumps_are_limited() {
    assert!((correct_angle_jump(350.0, 10.0, 30.0) - 10.0).abs() < 1e-9);
    let limited = correct_angle_jump(0.0, 90.0, 15.0);
    assert!((limited - 15.0).abs() < 1e-9);
    let backwards = correct_angle_jump(10.0, 300.0, 5.0);
    assert!((backwards - 5.0).abs() < 1e-9);
}

#[test]
fn angular_low_pass_wraps() {
    let v = angular_low_pass(355.0, 5.0, 0.5);
    assert!(v.abs() < 1e-9 || (v - 360.0).abs() < 1e-9);
}
