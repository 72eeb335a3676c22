use super::*;

// =============================================================
// Throttle
// =============================================================

#[test]
fn throttle_runs_first_call() {
    let mut gate = Throttle::new(10);
    assert!(gate.ready(1000.0));
}

#[test]
fn throttle_drops_calls_inside_window() {
    let mut gate = Throttle::new(10);
    assert!(gate.ready(1000.0));
    assert!(!gate.ready(1005.0));
    assert!(!gate.ready(1009.9));
    assert!(gate.ready(1010.0));
}

#[test]
fn dropped_calls_do_not_extend_window() {
    let mut gate = Throttle::new(10);
    gate.ready(0.0);
    gate.ready(9.0);
    assert!(gate.ready(10.0));
}

// =============================================================
// Debounce
// =============================================================

#[test]
fn debounce_idle_never_fires() {
    let mut gate = Debounce::new(100);
    assert!(!gate.poll(1_000_000.0));
}

#[test]
fn debounce_fires_after_quiet_period() {
    let mut gate = Debounce::new(100);
    gate.call(0.0);
    assert!(!gate.poll(99.0));
    assert!(gate.poll(100.0));
    assert!(!gate.poll(200.0), "fires once per burst");
}

#[test]
fn debounce_restarts_on_each_call() {
    let mut gate = Debounce::new(100);
    gate.call(0.0);
    gate.call(80.0);
    assert!(!gate.poll(100.0));
    assert!(gate.poll(180.0));
}
