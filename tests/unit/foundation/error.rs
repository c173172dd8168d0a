use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        VectorGridError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        VectorGridError::animation("x")
            .to_string()
            .contains("animation error:")
    );
    assert!(
        VectorGridError::layout("x")
            .to_string()
            .contains("layout error:")
    );
    assert!(
        VectorGridError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
    assert_eq!(
        VectorGridError::UnknownAnimation("spin".to_string()).to_string(),
        "unknown animation 'spin'"
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = VectorGridError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn serde_json_errors_convert() {
    let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err = VectorGridError::from(parse);
    assert!(matches!(err, VectorGridError::Serde(_)));
}
