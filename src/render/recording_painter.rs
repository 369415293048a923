use crate::core::Rect;
use crate::error::ViewportResult;
use crate::render::{Color, Font, Painter};

/// One call received by a [`RecordingPainter`].
#[derive(Debug, Clone, PartialEq)]
pub enum PainterCall {
    SetStrokeStyle(Color),
    SetFillStyle(Color),
    SetLineWidth(f64),
    SetFont(Font),
    ClearRect(Rect),
    FillRect(Rect),
    StrokeRect(Rect),
    BeginPath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    Arc {
        center_x: f64,
        center_y: f64,
        radius: f64,
    },
    ClosePath,
    Stroke,
    Fill,
    Save,
    Restore,
    Clip(Rect),
    FillText { text: String, x: f64, y: f64 },
}

impl PainterCall {
    /// True for calls that put pixels on the surface.
    #[must_use]
    pub fn is_draw(&self) -> bool {
        matches!(
            self,
            Self::FillRect(_) | Self::StrokeRect(_) | Self::Stroke | Self::Fill | Self::FillText { .. }
        )
    }
}

/// Headless painter that records every call, for tests and diagnostics.
///
/// Text is measured with a fixed advance per character.
#[derive(Debug, Clone)]
pub struct RecordingPainter {
    calls: Vec<PainterCall>,
    char_advance_px: f64,
}

impl RecordingPainter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            char_advance_px: 7.0,
        }
    }

    #[must_use]
    pub fn calls(&self) -> &[PainterCall] {
        &self.calls
    }

    #[must_use]
    pub fn take_calls(&mut self) -> Vec<PainterCall> {
        std::mem::take(&mut self.calls)
    }

    #[must_use]
    pub fn draw_call_count(&self) -> usize {
        self.calls.iter().filter(|call| call.is_draw()).count()
    }

    #[must_use]
    pub fn count(&self, predicate: impl Fn(&PainterCall) -> bool) -> usize {
        self.calls.iter().filter(|call| predicate(call)).count()
    }
}

impl Default for RecordingPainter {
    fn default() -> Self {
        Self::new()
    }
}

impl Painter for RecordingPainter {
    fn set_stroke_style(&mut self, color: Color) {
        self.calls.push(PainterCall::SetStrokeStyle(color));
    }

    fn set_fill_style(&mut self, color: Color) {
        self.calls.push(PainterCall::SetFillStyle(color));
    }

    fn set_line_width(&mut self, width: f64) {
        self.calls.push(PainterCall::SetLineWidth(width));
    }

    fn set_font(&mut self, font: &Font) {
        self.calls.push(PainterCall::SetFont(font.clone()));
    }

    fn clear_rect(&mut self, rect: Rect) -> ViewportResult<()> {
        self.calls.push(PainterCall::ClearRect(rect));
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect) -> ViewportResult<()> {
        self.calls.push(PainterCall::FillRect(rect));
        Ok(())
    }

    fn stroke_rect(&mut self, rect: Rect) -> ViewportResult<()> {
        self.calls.push(PainterCall::StrokeRect(rect));
        Ok(())
    }

    fn begin_path(&mut self) {
        self.calls.push(PainterCall::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.calls.push(PainterCall::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.calls.push(PainterCall::LineTo(x, y));
    }

    fn arc(&mut self, center_x: f64, center_y: f64, radius: f64, _start_angle: f64, _end_angle: f64) {
        self.calls.push(PainterCall::Arc {
            center_x,
            center_y,
            radius,
        });
    }

    fn close_path(&mut self) {
        self.calls.push(PainterCall::ClosePath);
    }

    fn stroke(&mut self) -> ViewportResult<()> {
        self.calls.push(PainterCall::Stroke);
        Ok(())
    }

    fn fill(&mut self) -> ViewportResult<()> {
        self.calls.push(PainterCall::Fill);
        Ok(())
    }

    fn save(&mut self) -> ViewportResult<()> {
        self.calls.push(PainterCall::Save);
        Ok(())
    }

    fn restore(&mut self) -> ViewportResult<()> {
        self.calls.push(PainterCall::Restore);
        Ok(())
    }

    fn clip(&mut self, rect: Rect) -> ViewportResult<()> {
        self.calls.push(PainterCall::Clip(rect));
        Ok(())
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> ViewportResult<()> {
        self.calls.push(PainterCall::FillText {
            text: text.to_owned(),
            x,
            y,
        });
        Ok(())
    }

    fn measure_text(&mut self, text: &str) -> f64 {
        text.chars().count() as f64 * self.char_advance_px
    }
}
