//! Crate-wide constants.
//!
//! Centralizes the interaction tuning values so they live in one place.

/// Minimum pointer travel, in device-independent units, before a drag
/// gesture starts moving items. Keeps accidental micro-drags from
/// disturbing a click.
///
/// Doubles as the hysteresis band for axis locking: an established lock is
/// only overridden once the displacement difference exceeds this value.
pub const DRAG_THRESHOLD: f32 = 10.0;
