use serde::{Deserialize, Serialize};

use crate::core::{Padding, PinnedAxis, Surface};
use crate::error::{ViewportError, ViewportResult};
use crate::interaction::GestureConfig;

use super::RenderStyle;

pub const ENGINE_CONFIG_JSON_SCHEMA_V1: u32 = 1;

/// Sample-marker pass tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerConfig {
    #[serde(default = "default_marker_enabled")]
    pub enabled: bool,
    /// Markers are drawn only when the average on-screen spacing between
    /// decimated vertices exceeds this many logical pixels.
    #[serde(default = "default_marker_visibility_threshold_px")]
    pub visibility_threshold_px: f64,
    #[serde(default = "default_marker_radius_px")]
    pub radius_px: f64,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            enabled: default_marker_enabled(),
            visibility_threshold_px: default_marker_visibility_threshold_px(),
            radius_px: default_marker_radius_px(),
        }
    }
}

/// Axis grid tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    #[serde(default = "default_grid_enabled")]
    pub enabled: bool,
    /// Minimum on-screen gap between gridlines, logical px.
    #[serde(default = "default_grid_min_spacing_px")]
    pub min_spacing_px: f64,
    #[serde(default = "default_grid_label_font_size_px")]
    pub label_font_size_px: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            enabled: default_grid_enabled(),
            min_spacing_px: default_grid_min_spacing_px(),
            label_font_size_px: default_grid_label_font_size_px(),
        }
    }
}

/// Public engine bootstrap configuration.
///
/// Serializable so host applications can persist engine setup. View state is
/// deliberately not part of it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub surface: Surface,
    #[serde(default)]
    pub padding: Padding,
    #[serde(default)]
    pub pinned_axis: Option<PinnedAxis>,
    #[serde(default)]
    pub gestures: GestureConfig,
    #[serde(default)]
    pub markers: MarkerConfig,
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub style: RenderStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: EngineConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(Surface::default())
    }
}

impl EngineConfig {
    #[must_use]
    pub fn new(surface: Surface) -> Self {
        Self {
            surface,
            padding: Padding::default(),
            pinned_axis: None,
            gestures: GestureConfig::default(),
            markers: MarkerConfig::default(),
            grid: GridConfig::default(),
            style: RenderStyle::default(),
        }
    }

    #[must_use]
    pub fn with_surface(mut self, surface: Surface) -> Self {
        self.surface = surface;
        self
    }

    #[must_use]
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Pins one axis to a fixed view extent.
    #[must_use]
    pub fn with_pinned_axis(mut self, pinned_axis: Option<PinnedAxis>) -> Self {
        self.pinned_axis = pinned_axis;
        self
    }

    #[must_use]
    pub fn with_gestures(mut self, gestures: GestureConfig) -> Self {
        self.gestures = gestures;
        self
    }

    #[must_use]
    pub fn with_markers(mut self, markers: MarkerConfig) -> Self {
        self.markers = markers;
        self
    }

    #[must_use]
    pub fn with_grid(mut self, grid: GridConfig) -> Self {
        self.grid = grid;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: RenderStyle) -> Self {
        self.style = style;
        self
    }

    pub fn validate(&self) -> ViewportResult<()> {
        if !self.surface.is_valid() {
            return Err(ViewportError::Configuration(format!(
                "surface must be finite with positive size and dpr, got {:?}",
                self.surface
            )));
        }
        if !self.padding.is_valid() {
            return Err(ViewportError::Configuration(
                "padding must be finite and >= 0".to_owned(),
            ));
        }
        if let Some(pinned) = self.pinned_axis {
            require_positive("pinned_axis.extent", pinned.extent())?;
        }

        let gestures = self.gestures;
        require_positive("gestures.zoom_sensitivity", gestures.zoom_sensitivity)?;
        require_positive("gestures.min_zoom_factor", gestures.min_zoom_factor)?;
        if !gestures.min_drag_distance_px.is_finite() || gestures.min_drag_distance_px < 0.0 {
            return Err(ViewportError::Configuration(
                "gestures.min_drag_distance_px must be finite and >= 0".to_owned(),
            ));
        }
        if gestures.zoom_modifier == gestures.x_only_zoom_modifier {
            return Err(ViewportError::Configuration(
                "x-only zoom modifier must differ from the zoom modifier".to_owned(),
            ));
        }

        require_positive(
            "markers.visibility_threshold_px",
            self.markers.visibility_threshold_px,
        )?;
        require_positive("markers.radius_px", self.markers.radius_px)?;
        require_positive("grid.min_spacing_px", self.grid.min_spacing_px)?;
        require_positive("grid.label_font_size_px", self.grid.label_font_size_px)?;

        self.style
            .validate()
            .map_err(|e| ViewportError::Configuration(format!("invalid render style: {e}")))
    }

    pub fn to_json_pretty(&self) -> ViewportResult<String> {
        let payload = EngineConfigJsonContractV1 {
            schema_version: ENGINE_CONFIG_JSON_SCHEMA_V1,
            config: *self,
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ViewportError::InvalidData(format!("failed to serialize engine config: {e}"))
        })
    }

    /// Parses either a bare config object or a versioned contract payload.
    pub fn from_json_str(input: &str) -> ViewportResult<Self> {
        if let Ok(payload) = serde_json::from_str::<EngineConfigJsonContractV1>(input) {
            if payload.schema_version != ENGINE_CONFIG_JSON_SCHEMA_V1 {
                return Err(ViewportError::InvalidData(format!(
                    "unsupported engine config schema version: {}",
                    payload.schema_version
                )));
            }
            return Ok(payload.config);
        }
        serde_json::from_str::<Self>(input).map_err(|e| {
            ViewportError::InvalidData(format!("failed to parse engine config json: {e}"))
        })
    }
}

fn require_positive(name: &str, value: f64) -> ViewportResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ViewportError::Configuration(format!(
            "`{name}` must be finite and > 0"
        )));
    }
    Ok(())
}

fn default_marker_enabled() -> bool {
    true
}

fn default_marker_visibility_threshold_px() -> f64 {
    6.0
}

fn default_marker_radius_px() -> f64 {
    2.5
}

fn default_grid_enabled() -> bool {
    true
}

fn default_grid_min_spacing_px() -> f64 {
    48.0
}

fn default_grid_label_font_size_px() -> f64 {
    11.0
}
