//! Dragger configuration.
//!
//! The host-tunable behavior knobs: parent-bounds clamping with a
//! permitted-offscreen allowance, and modifier-driven axis locking.
//! Configs serialize as JSON so hosts can embed them in settings files;
//! missing fields fall back to their defaults.

use crate::geometry::Insets;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when loading or validating a [`DraggerConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A permitted-offscreen inset is negative
    #[error("negative {side} inset: {value}")]
    NegativeInset { side: &'static str, value: f32 },

    /// A permitted-offscreen inset is NaN or infinite
    #[error("non-finite {side} inset: {value}")]
    NonFiniteInset { side: &'static str, value: f32 },
}

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Behavior knobs for a [`DragController`](crate::controller::DragController).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DraggerConfig {
    /// Clamp group movement so the selection's union box stays within the
    /// parent container.
    pub constrain_to_parent: bool,
    /// How far past each container edge the selection's union box may
    /// travel while clamping is active.
    pub permitted_offscreen: Insets,
    /// Constrain movement to a single axis while the axis-lock modifier is
    /// held during a drag.
    pub axis_lock: bool,
    /// Publish an axis guide for hosts to draw while a lock is engaged.
    pub show_axis_guides: bool,
}

impl Default for DraggerConfig {
    fn default() -> Self {
        Self {
            constrain_to_parent: true,
            permitted_offscreen: Insets::ZERO,
            axis_lock: false,
            show_axis_guides: true,
        }
    }
}

impl DraggerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable parent-bounds clamping, with the offscreen slack
    /// allowed per side while it is on.
    pub fn with_constrain_to_parent(mut self, constrain: bool, permitted_offscreen: Insets) -> Self {
        self.constrain_to_parent = constrain;
        self.permitted_offscreen = permitted_offscreen;
        self
    }

    /// Enable or disable modifier-driven axis locking.
    pub fn with_axis_lock(mut self, lock: bool) -> Self {
        self.axis_lock = lock;
        self
    }

    /// Enable or disable the axis guide published while a lock is engaged.
    pub fn with_axis_guides(mut self, show: bool) -> Self {
        self.show_axis_guides = show;
        self
    }

    /// Parse a config from JSON and validate it. Fields absent from the
    /// JSON keep their default values.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the config as pretty-printed JSON.
    pub fn to_json_string(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check invariants: every permitted-offscreen inset must be finite
    /// and non-negative.
    pub fn validate(&self) -> ConfigResult<()> {
        let sides = [
            ("top", self.permitted_offscreen.top),
            ("right", self.permitted_offscreen.right),
            ("bottom", self.permitted_offscreen.bottom),
            ("left", self.permitted_offscreen.left),
        ];
        for (side, value) in sides {
            if !value.is_finite() {
                return Err(ConfigError::NonFiniteInset { side, value });
            }
            if value < 0.0 {
                return Err(ConfigError::NegativeInset { side, value });
            }
        }
        Ok(())
    }
}
