//! Performance instrumentation tests.

use multidrag::perf::{ScopedTimer, SLOW_SCOPE_MS};
use std::time::Duration;

#[test]
fn test_scoped_timer_reports_elapsed_time() {
    let timer = ScopedTimer::new("registry_rebuild", 1000.0);
    std::thread::sleep(Duration::from_millis(5));

    let elapsed = timer.elapsed_ms();
    assert!(elapsed >= 5.0, "expected at least 5ms, got {elapsed}");
}

#[test]
fn test_default_threshold_is_within_frame_budget() {
    // Handlers are budgeted well under one 60 FPS frame (16.67ms).
    assert!(SLOW_SCOPE_MS < 16.67);

    let timer = ScopedTimer::for_profiling("pointer_drag");
    assert!(timer.elapsed_ms() >= 0.0);
}
