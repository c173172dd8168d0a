use super::*;
use serde_json::json;

#[test]
fn numeric_reads_fall_back_on_garbage() {
    let v = json!({
        "a": 2.5,
        "b": "3.5",
        "c": "nope",
        "d": null,
        "e": true,
        "f": [1, 2]
    });
    let bag = ParamBag::new(&v);
    assert_eq!(bag.f64_or("a", 0.0), 2.5);
    assert_eq!(bag.f64_or("b", 0.0), 3.5);
    assert_eq!(bag.f64_or("c", 7.0), 7.0);
    assert_eq!(bag.f64_or("d", 7.0), 7.0);
    assert_eq!(bag.f64_or("e", 7.0), 7.0);
    assert_eq!(bag.f64_or("f", 7.0), 7.0);
    assert_eq!(bag.f64_or("missing", 1.0), 1.0);
}

#[test]
fn zero_is_a_real_value() {
    let v = json!({ "angle": 0 });
    assert_eq!(ParamBag::new(&v).f64_or("angle", 45.0), 0.0);
}

#[test]
fn non_object_bags_behave_as_empty() {
    let v = json!(42);
    let bag = ParamBag::new(&v);
    assert_eq!(bag.f64_or("x", 1.5), 1.5);
    assert!(!ParamBag::empty().bool_or("x", false));
}

#[test]
fn integer_and_bool_reads() {
    let v = json!({ "n": 4.6, "neg": -3, "seed": 42, "on": "yes", "off": 0 });
    let bag = ParamBag::new(&v);
    assert_eq!(bag.u32_or("n", 1), 5);
    assert_eq!(bag.u32_or("neg", 1), 0);
    assert_eq!(bag.u64_or("seed", 0), 42);
    assert!(bag.bool_or("on", false));
    assert!(!bag.bool_or("off", true));
    assert_eq!(bag.f64_in("n", 0.0, 0.0, 1.0), 1.0);
}

#[test]
fn canonical_ids_ignore_case_and_separators() {
    assert_eq!(canonical_id("logSpiral"), "logspiral");
    assert_eq!(canonical_id(" log_spiral "), "logspiral");
    assert_eq!(canonical_id("Log-Spiral"), "logspiral");
}
