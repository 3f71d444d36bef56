//! Performance instrumentation for the pointer-event hot paths.
//!
//! Drag events arrive on every pointer move during a gesture, so
//! instrumentation must cost nothing when disabled. [`profile_scope!`]
//! expands to a no-op unless the `profiling` feature is enabled; with it
//! on, each scope logs its elapsed time through `tracing` and flags slow
//! ones at warn level.

use std::time::Instant;
use tracing::{trace, warn};

/// Elapsed time above which a profiled scope logs at warn level, in
/// milliseconds. A quarter of a 60 FPS frame; a pointer handler slower
/// than this eats visibly into the frame budget.
pub const SLOW_SCOPE_MS: f64 = 4.0;

/// RAII timer that logs its scope's elapsed time when dropped.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    warn_threshold_ms: f64,
}

impl ScopedTimer {
    /// Start a timer with an explicit warn threshold.
    pub fn new(name: &'static str, warn_threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            warn_threshold_ms,
        }
    }

    /// Start a timer with the default threshold, for [`profile_scope!`].
    pub fn for_profiling(name: &'static str) -> Self {
        Self::new(name, SLOW_SCOPE_MS)
    }

    /// Elapsed time since the timer started, in milliseconds.
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();
        if elapsed_ms >= self.warn_threshold_ms {
            warn!(scope = self.name, elapsed_ms, "slow scope");
        } else {
            trace!(scope = self.name, elapsed_ms, "scope timing");
        }
    }
}

/// Time the enclosing scope when the `profiling` feature is enabled.
/// Zero-cost otherwise.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _scope_timer = $crate::perf::ScopedTimer::for_profiling($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _scope_timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}
