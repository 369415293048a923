use crate::error::ViewportResult;
use crate::render::{RenderFrame, Renderer, SurfaceLayer};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so tests can catch invalid geometry before
/// a real backend is introduced.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub series_frames: usize,
    pub overlay_frames: usize,
    pub last_line_count: usize,
    pub last_text_count: usize,
    pub last_vertex_count: usize,
    pub last_marker_count: usize,
    pub last_series_frame: Option<RenderFrame>,
    pub last_overlay_frame: Option<RenderFrame>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ViewportResult<()> {
        frame.validate()?;
        self.last_line_count = frame.lines.len();
        self.last_text_count = frame.texts.len();
        self.last_vertex_count = frame.vertex_count();
        self.last_marker_count = frame.markers.len();
        match frame.layer {
            SurfaceLayer::Series => {
                self.series_frames += 1;
                self.last_series_frame = Some(frame.clone());
            }
            SurfaceLayer::Overlay => {
                self.overlay_frames += 1;
                self.last_overlay_frame = Some(frame.clone());
            }
        }
        Ok(())
    }
}
