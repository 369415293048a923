use serde::{Deserialize, Serialize};

use crate::core::Rect;
use crate::error::{ViewportError, ViewportResult};
use crate::render::{
    LinePrimitive, MarkerPrimitive, PolylinePrimitive, RectPrimitive, TextPrimitive,
};

/// Target surface of a frame.
///
/// The overlay is a transparent surface of the same physical size stacked on
/// top of the series surface, so cursor movement only repaints the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SurfaceLayer {
    Series,
    Overlay,
}

/// Backend-agnostic scene for one surface draw pass.
///
/// Paint order: clear, then inside `clip` the rects, lines, polylines and
/// markers, then texts unclipped.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub layer: SurfaceLayer,
    pub width: f64,
    pub height: f64,
    pub clip: Option<Rect>,
    pub rects: Vec<RectPrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub polylines: Vec<PolylinePrimitive>,
    pub markers: Vec<MarkerPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(layer: SurfaceLayer, width: f64, height: f64) -> Self {
        Self {
            layer,
            width,
            height,
            clip: None,
            rects: Vec::new(),
            lines: Vec::new(),
            polylines: Vec::new(),
            markers: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_clip(mut self, clip: Rect) -> Self {
        self.clip = Some(clip);
        self
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    pub fn validate(&self) -> ViewportResult<()> {
        if !self.width.is_finite() || !self.height.is_finite() || self.width <= 0.0 || self.height <= 0.0
        {
            return Err(ViewportError::InvalidData(format!(
                "frame size must be finite and > 0, got {}x{}",
                self.width, self.height
            )));
        }
        if let Some(clip) = self.clip {
            if !clip.is_finite() || clip.width < 0.0 || clip.height < 0.0 {
                return Err(ViewportError::InvalidData(
                    "clip rectangle must be finite with non-negative size".to_owned(),
                ));
            }
        }

        for rect in &self.rects {
            rect.validate()?;
        }
        for line in &self.lines {
            line.validate()?;
        }
        for polyline in &self.polylines {
            polyline.validate()?;
        }
        for marker in &self.markers {
            marker.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    /// True when the frame only clears its surface.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
            && self.lines.is_empty()
            && self.polylines.is_empty()
            && self.markers.is_empty()
            && self.texts.is_empty()
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.polylines.iter().map(|polyline| polyline.points.len()).sum()
    }
}
