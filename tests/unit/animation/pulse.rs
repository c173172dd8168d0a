use super::*;

#[test]
fn pulse_lifecycle_created_active_expired() {
    let mut pm = PulseManager::new();
    let id = pm.trigger_pulse(0.5, 0.5, 10.0);
    assert_eq!(pm.len(), 1);

    assert_eq!(pm.active_pulses(9.0, 2.0).count(), 0);
    let active: Vec<_> = pm.active_pulses(10.0, 2.0).map(|p| p.id).collect();
    assert_eq!(active, vec![id]);
    assert_eq!(pm.active_pulses(11.99, 2.0).count(), 1);
    assert_eq!(pm.active_pulses(12.0, 2.0).count(), 0);

    pm.update_pulses(11.0, 2.0);
    assert_eq!(pm.len(), 1);
    pm.update_pulses(12.5, 2.0);
    assert!(pm.is_empty());
}

#[test]
fn query_is_pure() {
    let mut pm = PulseManager::new();
    pm.trigger_pulse(0.1, 0.2, 0.0);
    let _ = pm.active_pulses(100.0, 1.0).count();
    assert_eq!(pm.len(), 1);
}

#[test]
fn concurrent_pulses_get_fresh_ids() {
    let mut pm = PulseManager::new();
    let a = pm.trigger_pulse(0.0, 0.0, 0.0);
    let b = pm.trigger_pulse(1.0, 1.0, 0.5);
    assert_ne!(a, b);
    assert_eq!(pm.active_pulses(0.75, 2.0).count(), 2);
    assert_eq!(pm.last_start_time(), Some(0.5));
}

#[test]
fn capacity_evicts_oldest() {
    let mut pm = PulseManager::with_capacity(3);
    let first = pm.trigger_pulse(0.5, 0.5, 0.0);
    for i in 1..5 {
        pm.trigger_pulse(0.5, 0.5, f64::from(i));
    }
    assert_eq!(pm.len(), 3);
    assert!(pm.active_pulses(4.5, 100.0).all(|p| p.id != first));
}

#[test]
fn max_reached_pulses_are_pruned() {
    let mut pm = PulseManager::new();
    let id = pm.trigger_pulse(0.5, 0.5, 0.0);
    pm.mark_max_reached(id);
    pm.update_pulses(0.1, 10.0);
    assert!(pm.is_empty());
}

#[test]
fn centers_are_clamped_and_clear_empties() {
    let mut pm = PulseManager::new();
    pm.trigger_pulse(2.0, f64::NAN, 0.0);
    let p = *pm.active_pulses(0.0, 1.0).next().unwrap();
    assert_eq!((p.center_x, p.center_y), (1.0, 0.5));
    pm.clear_pulses();
    assert!(pm.is_empty());
}
