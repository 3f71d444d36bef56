//! Pointer-event handling for the drag controller.
//!
//! The handler methods live on
//! [`DragController`](crate::controller::DragController), one file per
//! notification:
//!
//! - `pointer_down`: selection updates and drag-session start
//! - `drag`: threshold gating, clamping, axis locking, group movement
//! - `pointer_up`: click-toggle semantics and session teardown
//!
//! `state` holds the per-gesture session and the axis-lock state machine.

pub mod state;

mod drag;
mod pointer_down;
mod pointer_up;

pub use state::AxisLock;
