//! Multi-select drag control for canvas-style desktop UIs.
//!
//! `multidrag` implements the selection and group-drag behavior familiar
//! from slide editors and node canvases: click selects, a multi-select
//! modifier extends the selection, and dragging any selected item moves
//! the whole group. Movement can be clamped to the parent container with
//! a configurable offscreen allowance, and a modifier can lock a drag to
//! one axis with hysteresis.
//!
//! The crate is headless. It owns no windowing, painting, or event loop;
//! hosts register containers and items with an [`ItemRegistry`], forward
//! pointer notifications to a [`DragController`], then drain its redraw
//! requests and re-read item bounds when painting.
//!
//! ```ignore
//! use multidrag::{DragController, DraggerConfig, ItemRegistry, Modifiers, PointerEvent, Rect, Vec2};
//!
//! let mut items = ItemRegistry::new();
//! let canvas = items.add_container(Rect::new(0.0, 0.0, 600.0, 400.0));
//! let note = items.add_item(canvas, Rect::new(20.0, 20.0, 30.0, 30.0));
//!
//! let mut dragger = DragController::new(DraggerConfig::default());
//!
//! // In the host's event handlers:
//! let down = PointerEvent::new(Vec2::new(35.0, 35.0), Modifiers::button());
//! dragger.handle_pointer_down(&items, note, &down);
//!
//! let drag = PointerEvent::new(Vec2::new(60.0, 35.0), Modifiers::button())
//!     .with_drag_distance(25.0);
//! dragger.handle_pointer_drag(&mut items, &drag);
//!
//! dragger.handle_pointer_up(&items, note, &PointerEvent::new(Vec2::new(60.0, 35.0), Modifiers::NONE));
//!
//! for id in dragger.take_repaints() {
//!     // repaint the widget behind `id`
//! }
//! ```

pub mod config;
pub mod constants;
pub mod controller;
pub mod geometry;
pub mod input;
pub mod perf;
mod registry;
mod spatial_index;
pub mod types;

pub use config::{ConfigError, ConfigResult, DraggerConfig};
pub use constants::DRAG_THRESHOLD;
pub use controller::DragController;
pub use geometry::{Insets, Rect, Vec2};
pub use input::AxisLock;
pub use registry::ItemRegistry;
pub use types::{ContainerId, DragGuide, ItemId, ManagedItem, Modifiers, PointerEvent};
