use crate::core::Rect;
use crate::error::ViewportResult;
use crate::render::{Color, Font};

/// Immediate-mode 2D drawing capability provided by a raster backend.
///
/// Mirrors the usual canvas surface: style setters, rectangle fills, a single
/// current path, clip regions and text. Coordinates are physical pixels.
pub trait Painter {
    fn set_stroke_style(&mut self, color: Color);
    fn set_fill_style(&mut self, color: Color);
    fn set_line_width(&mut self, width: f64);
    fn set_font(&mut self, font: &Font);

    fn clear_rect(&mut self, rect: Rect) -> ViewportResult<()>;
    fn fill_rect(&mut self, rect: Rect) -> ViewportResult<()>;
    fn stroke_rect(&mut self, rect: Rect) -> ViewportResult<()>;

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn arc(&mut self, center_x: f64, center_y: f64, radius: f64, start_angle: f64, end_angle: f64);
    fn close_path(&mut self);
    fn stroke(&mut self) -> ViewportResult<()>;
    fn fill(&mut self) -> ViewportResult<()>;

    fn save(&mut self) -> ViewportResult<()>;
    /// Restores the state pushed by the matching `save`, including styles.
    fn restore(&mut self) -> ViewportResult<()>;
    /// Intersects the clip region with `rect`.
    fn clip(&mut self, rect: Rect) -> ViewportResult<()>;

    /// Draws `text` with its baseline-left at `(x, y)`.
    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> ViewportResult<()>;
    fn measure_text(&mut self, text: &str) -> f64;
}

/// Last value written per painter state property.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PainterStateMemo {
    stroke_style: Option<Color>,
    fill_style: Option<Color>,
    line_width: Option<f64>,
    font: Option<Font>,
}

/// Write counters kept by [`StatefulPainter`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PainterStateStats {
    pub writes: usize,
    pub skipped: usize,
}

/// Wraps a painter and skips state writes that repeat the last value.
///
/// `restore` rolls the backend state back to an unknown point, so the memo is
/// forgotten there.
#[derive(Debug)]
pub struct StatefulPainter<P: Painter> {
    inner: P,
    memo: PainterStateMemo,
    stats: PainterStateStats,
}

impl<P: Painter> StatefulPainter<P> {
    #[must_use]
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            memo: PainterStateMemo::default(),
            stats: PainterStateStats::default(),
        }
    }

    #[must_use]
    pub fn inner(&self) -> &P {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut P {
        &mut self.inner
    }

    #[must_use]
    pub fn into_inner(self) -> P {
        self.inner
    }

    #[must_use]
    pub fn stats(&self) -> PainterStateStats {
        self.stats
    }

    /// Forgets every memoized value; the next write of each property goes through.
    pub fn invalidate_state(&mut self) {
        self.memo = PainterStateMemo::default();
    }

    fn record(&mut self, changed: bool) -> bool {
        if changed {
            self.stats.writes += 1;
        } else {
            self.stats.skipped += 1;
        }
        changed
    }
}

impl<P: Painter> Painter for StatefulPainter<P> {
    fn set_stroke_style(&mut self, color: Color) {
        let changed = self.memo.stroke_style != Some(color);
        if self.record(changed) {
            self.memo.stroke_style = Some(color);
            self.inner.set_stroke_style(color);
        }
    }

    fn set_fill_style(&mut self, color: Color) {
        let changed = self.memo.fill_style != Some(color);
        if self.record(changed) {
            self.memo.fill_style = Some(color);
            self.inner.set_fill_style(color);
        }
    }

    fn set_line_width(&mut self, width: f64) {
        let changed = self.memo.line_width != Some(width);
        if self.record(changed) {
            self.memo.line_width = Some(width);
            self.inner.set_line_width(width);
        }
    }

    fn set_font(&mut self, font: &Font) {
        let changed = self.memo.font.as_ref() != Some(font);
        if self.record(changed) {
            self.memo.font = Some(font.clone());
            self.inner.set_font(font);
        }
    }

    fn clear_rect(&mut self, rect: Rect) -> ViewportResult<()> {
        self.inner.clear_rect(rect)
    }

    fn fill_rect(&mut self, rect: Rect) -> ViewportResult<()> {
        self.inner.fill_rect(rect)
    }

    fn stroke_rect(&mut self, rect: Rect) -> ViewportResult<()> {
        self.inner.stroke_rect(rect)
    }

    fn begin_path(&mut self) {
        self.inner.begin_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.inner.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.inner.line_to(x, y);
    }

    fn arc(&mut self, center_x: f64, center_y: f64, radius: f64, start_angle: f64, end_angle: f64) {
        self.inner
            .arc(center_x, center_y, radius, start_angle, end_angle);
    }

    fn close_path(&mut self) {
        self.inner.close_path();
    }

    fn stroke(&mut self) -> ViewportResult<()> {
        self.inner.stroke()
    }

    fn fill(&mut self) -> ViewportResult<()> {
        self.inner.fill()
    }

    fn save(&mut self) -> ViewportResult<()> {
        self.inner.save()
    }

    fn restore(&mut self) -> ViewportResult<()> {
        self.invalidate_state();
        self.inner.restore()
    }

    fn clip(&mut self, rect: Rect) -> ViewportResult<()> {
        self.inner.clip(rect)
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> ViewportResult<()> {
        self.inner.fill_text(text, x, y)
    }

    fn measure_text(&mut self, text: &str) -> f64 {
        self.inner.measure_text(text)
    }
}
