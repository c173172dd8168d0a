use super::*;

#[test]
fn curves_hit_endpoints() {
    for e in [
        Ease::Linear,
        Ease::InQuad,
        Ease::OutQuad,
        Ease::InOutQuad,
        Ease::InCubic,
        Ease::OutCubic,
        Ease::InOutCubic,
    ] {
        assert!((e.apply(0.0) - 0.0).abs() < 1e-12, "{e:?}");
        assert!((e.apply(1.0) - 1.0).abs() < 1e-12, "{e:?}");
    }
}

#[test]
fn input_is_clamped() {
    assert_eq!(Ease::OutCubic.apply(-3.0), 0.0);
    assert_eq!(Ease::OutCubic.apply(4.0), 1.0);
    assert_eq!(Ease::Linear.apply(f64::NAN), 0.0);
}

#[test]
fn parse_accepts_common_spellings() {
    assert_eq!(Ease::parse("easeOutQuad"), Some(Ease::OutQuad));
    assert_eq!(Ease::parse("in_out_cubic"), Some(Ease::InOutCubic));
    assert_eq!(Ease::parse("bounce"), None);
}
