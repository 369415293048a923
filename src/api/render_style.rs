use serde::{Deserialize, Serialize};

use crate::error::{ViewportError, ViewportResult};
use crate::render::Color;

/// Colors and stroke widths used by both surface layers.
///
/// Widths are logical pixels; frame builders scale them by the device pixel
/// ratio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderStyle {
    pub series_line_color: Color,
    pub series_line_width: f64,
    pub marker_color: Color,
    pub grid_line_color: Color,
    pub grid_line_width: f64,
    pub grid_label_color: Color,
    pub crosshair_line_color: Color,
    pub crosshair_line_width: f64,
    pub crosshair_dot_color: Color,
    pub crosshair_dot_radius: f64,
    pub crosshair_label_color: Color,
    pub selection_fill_color: Color,
    pub selection_border_color: Color,
    pub selection_border_width: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            series_line_color: Color::rgb(0.13, 0.39, 0.84),
            series_line_width: 1.0,
            marker_color: Color::rgb(0.85, 0.1, 0.1),
            grid_line_color: Color::rgba(0.5, 0.5, 0.5, 0.35),
            grid_line_width: 1.0,
            grid_label_color: Color::rgb(0.3, 0.3, 0.3),
            crosshair_line_color: Color::rgba(0.2, 0.2, 0.2, 0.7),
            crosshair_line_width: 1.0,
            crosshair_dot_color: Color::rgb(0.85, 0.1, 0.1),
            crosshair_dot_radius: 3.0,
            crosshair_label_color: Color::rgb(0.1, 0.1, 0.1),
            selection_fill_color: Color::rgba(0.13, 0.39, 0.84, 0.15),
            selection_border_color: Color::rgba(0.13, 0.39, 0.84, 0.8),
            selection_border_width: 1.0,
        }
    }
}

impl RenderStyle {
    pub fn validate(self) -> ViewportResult<()> {
        for color in [
            self.series_line_color,
            self.marker_color,
            self.grid_line_color,
            self.grid_label_color,
            self.crosshair_line_color,
            self.crosshair_dot_color,
            self.crosshair_label_color,
            self.selection_fill_color,
            self.selection_border_color,
        ] {
            color.validate()?;
        }

        for (name, width) in [
            ("series_line_width", self.series_line_width),
            ("grid_line_width", self.grid_line_width),
            ("crosshair_line_width", self.crosshair_line_width),
            ("crosshair_dot_radius", self.crosshair_dot_radius),
            ("selection_border_width", self.selection_border_width),
        ] {
            if !width.is_finite() || width <= 0.0 {
                return Err(ViewportError::Configuration(format!(
                    "render style `{name}` must be finite and > 0"
                )));
            }
        }
        Ok(())
    }
}
