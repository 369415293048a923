mod edge_follow;
mod gesture;
mod input;

pub use edge_follow::{RevealedEdge, edge_follow_view};
pub use gesture::{GestureController, WheelGesture};
pub use input::{ModifierKey, Modifiers, PointerEvent};

pub use crate::core::{AxisLock, GestureIntent};

use serde::{Deserialize, Serialize};

use crate::core::DataPoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InteractionMode {
    #[default]
    Idle,
    /// Pointer is down and a zoom rectangle is being dragged.
    Selecting,
}

/// Tuning for gesture classification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GestureConfig {
    /// `k` in `factor = 1 + delta_y * k` for modifier-wheel zoom.
    #[serde(default = "default_zoom_sensitivity")]
    pub zoom_sensitivity: f64,
    /// Lower bound applied to the wheel zoom factor so huge deltas never
    /// produce a non-positive scale.
    #[serde(default = "default_min_zoom_factor")]
    pub min_zoom_factor: f64,
    #[serde(default = "default_zoom_modifier")]
    pub zoom_modifier: ModifierKey,
    /// Held together with the zoom modifier to keep the y scale at 1.
    #[serde(default = "default_x_only_zoom_modifier")]
    pub x_only_zoom_modifier: ModifierKey,
    /// Drags shorter than this (logical px) don't zoom; 0 disables the check.
    #[serde(default)]
    pub min_drag_distance_px: f64,
    /// Re-frame y after a horizontal pan reveals an out-of-range sample.
    #[serde(default = "default_edge_follow")]
    pub edge_follow: bool,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            zoom_sensitivity: default_zoom_sensitivity(),
            min_zoom_factor: default_min_zoom_factor(),
            zoom_modifier: default_zoom_modifier(),
            x_only_zoom_modifier: default_x_only_zoom_modifier(),
            min_drag_distance_px: 0.0,
            edge_follow: default_edge_follow(),
        }
    }
}

fn default_zoom_sensitivity() -> f64 {
    0.005
}

fn default_min_zoom_factor() -> f64 {
    0.05
}

fn default_zoom_modifier() -> ModifierKey {
    ModifierKey::ControlOrMeta
}

fn default_x_only_zoom_modifier() -> ModifierKey {
    ModifierKey::Alt
}

fn default_edge_follow() -> bool {
    true
}

/// Sample the crosshair snapped to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CrosshairSnap {
    pub index: usize,
    pub sample: DataPoint,
    /// Sample position in logical surface pixels.
    pub x: f64,
    pub y: f64,
}

/// Public crosshair state exposed to host applications.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CrosshairState {
    pub visible: bool,
    /// Cursor position in logical surface pixels.
    pub x: f64,
    pub y: f64,
    /// Cursor position unprojected to data space.
    pub data: Option<DataPoint>,
    pub snap: Option<CrosshairSnap>,
}

impl CrosshairState {
    #[must_use]
    pub fn hidden() -> Self {
        Self::default()
    }
}
