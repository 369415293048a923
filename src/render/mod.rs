mod frame;
mod null_renderer;
mod painter;
mod painter_renderer;
mod primitives;
mod recording_painter;

pub use frame::{RenderFrame, SurfaceLayer};
pub use null_renderer::NullRenderer;
pub use painter::{Painter, PainterStateMemo, PainterStateStats, StatefulPainter};
pub use painter_renderer::{PaintStats, PainterRenderer, paint_frame};
pub use primitives::{
    Color, Font, LinePrimitive, MarkerPrimitive, PolylinePrimitive, RectPrimitive, TextHAlign,
    TextPrimitive,
};
pub use recording_painter::{PainterCall, RecordingPainter};

use crate::error::ViewportResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` per
/// surface layer so drawing code remains isolated from viewport and
/// interaction logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ViewportResult<()>;

    /// Whether the backend currently has a usable drawing context.
    ///
    /// Checked once at engine construction.
    fn is_available(&self) -> bool {
        true
    }
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::CairoPainter;
