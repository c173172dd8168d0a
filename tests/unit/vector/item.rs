use super::*;

fn points() -> Vec<LayoutPoint> {
    vec![
        LayoutPoint::grid(0.0, 0.0, 0, 0),
        LayoutPoint::grid(10.0, 0.0, 0, 1),
        LayoutPoint::at(5.0, 5.0),
    ]
}

#[test]
fn init_seeds_rest_state_from_settings() {
    let settings = VectorSettings {
        length: 30.0,
        width: 3.0,
        color: "#ff0000".to_string(),
        initial_angle: -90.0,
        flock_groups: 2,
        ..VectorSettings::default()
    };
    let items = init_vectors(&points(), &settings);
    assert_eq!(items.len(), 3);
    assert_eq!(items[0].id, "vector-0-0");
    assert_eq!(items[1].id, "vector-0-1");
    assert_eq!(items[2].id, "vector-2");
    assert_eq!(items[1].base_x, 10.0);
    assert_eq!(items[1].angle, 270.0);
    assert_eq!(items[1].base_angle, 270.0);
    assert_eq!(items[0].length, 30.0);
    assert_eq!(items[0].color, "#ff0000");
    assert_eq!(items[2].flock_id, Some(0));
    assert_eq!(items[1].flock_id, Some(1));
}

#[test]
fn non_finite_settings_fall_back() {
    let settings = VectorSettings {
        length: f64::NAN,
        opacity: 4.0,
        flock_groups: 0,
        ..VectorSettings::default()
    };
    let items = init_vectors(&points(), &settings);
    assert_eq!(items[0].length, VectorSettings::default().length);
    assert_eq!(items[0].opacity, 1.0);
    assert_eq!(items[0].flock_id, None);
}

#[test]
fn reset_restores_displayed_fields() {
    let mut items = init_vectors(&points(), &VectorSettings::default());
    let v = &mut items[0];
    v.angle = 123.0;
    v.x = 99.0;
    v.length_factor = 2.0;
    v.apply_factors();
    assert_eq!(v.length, 48.0);
    v.color = "#000".to_string();
    v.target_angle = Some(5.0);
    v.reset_to_base();
    assert_eq!(v.angle, v.base_angle);
    assert_eq!(v.x, v.base_x);
    assert_eq!(v.length, v.base_length);
    assert_eq!(v.color, v.original_color);
    assert_eq!(v.target_angle, None);
    assert_eq!(v.length_factor, 1.0);
}

#[test]
fn items_serialize_in_camel_case() {
    let items = init_vectors(&points(), &VectorSettings::default());
    let v = serde_json::to_value(&items[0]).unwrap();
    assert!(v.get("baseAngle").is_some());
    assert!(v.get("lengthFactor").is_some());
    assert!(v.get("customData").is_none());
    let back: AnimatedVectorItem = serde_json::from_value(v).unwrap();
    assert_eq!(back, items[0]);
}
