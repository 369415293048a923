use std::f64::consts::TAU;

use crate::error::ViewportResult;
use crate::render::{
    Font, MarkerPrimitive, Painter, RenderFrame, Renderer, StatefulPainter, SurfaceLayer,
    TextHAlign,
};

/// Per-frame counts reported by [`PainterRenderer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaintStats {
    pub rects_drawn: usize,
    pub lines_drawn: usize,
    pub polylines_drawn: usize,
    pub markers_drawn: usize,
    pub texts_drawn: usize,
}

/// Replays frames onto two painters: the series surface and the transparent
/// overlay surface stacked above it.
#[derive(Debug)]
pub struct PainterRenderer<P: Painter> {
    series: StatefulPainter<P>,
    overlay: StatefulPainter<P>,
    last_stats: PaintStats,
}

impl<P: Painter> PainterRenderer<P> {
    #[must_use]
    pub fn new(series: P, overlay: P) -> Self {
        Self {
            series: StatefulPainter::new(series),
            overlay: StatefulPainter::new(overlay),
            last_stats: PaintStats::default(),
        }
    }

    #[must_use]
    pub fn series_painter(&self) -> &StatefulPainter<P> {
        &self.series
    }

    #[must_use]
    pub fn overlay_painter(&self) -> &StatefulPainter<P> {
        &self.overlay
    }

    pub fn series_painter_mut(&mut self) -> &mut StatefulPainter<P> {
        &mut self.series
    }

    pub fn overlay_painter_mut(&mut self) -> &mut StatefulPainter<P> {
        &mut self.overlay
    }

    #[must_use]
    pub fn last_stats(&self) -> PaintStats {
        self.last_stats
    }

    #[must_use]
    pub fn into_painters(self) -> (P, P) {
        (self.series.into_inner(), self.overlay.into_inner())
    }
}

impl<P: Painter> Renderer for PainterRenderer<P> {
    fn render(&mut self, frame: &RenderFrame) -> ViewportResult<()> {
        let painter = match frame.layer {
            SurfaceLayer::Series => &mut self.series,
            SurfaceLayer::Overlay => &mut self.overlay,
        };
        self.last_stats = paint_frame(painter, frame)?;
        Ok(())
    }
}

/// Paints one frame: clear, clipped geometry, then unclipped labels.
pub fn paint_frame<P: Painter>(painter: &mut P, frame: &RenderFrame) -> ViewportResult<PaintStats> {
    frame.validate()?;
    let mut stats = PaintStats::default();

    painter.clear_rect(frame.bounds())?;
    if frame.is_empty() {
        return Ok(stats);
    }

    painter.save()?;
    if let Some(clip) = frame.clip {
        painter.clip(clip)?;
    }

    for rect in &frame.rects {
        painter.set_fill_style(rect.fill_color);
        painter.fill_rect(rect.rect)?;
        if rect.border_width > 0.0 {
            painter.set_stroke_style(rect.border_color);
            painter.set_line_width(rect.border_width);
            painter.stroke_rect(rect.rect)?;
        }
        stats.rects_drawn += 1;
    }

    for line in &frame.lines {
        painter.set_stroke_style(line.color);
        painter.set_line_width(line.stroke_width);
        painter.begin_path();
        painter.move_to(line.x1, line.y1);
        painter.line_to(line.x2, line.y2);
        painter.stroke()?;
        stats.lines_drawn += 1;
    }

    for polyline in &frame.polylines {
        let mut vertices = polyline.points.iter();
        let Some(first) = vertices.next() else {
            continue;
        };
        painter.set_stroke_style(polyline.color);
        painter.set_line_width(polyline.stroke_width);
        painter.begin_path();
        painter.move_to(first.x, first.y);
        for vertex in vertices {
            painter.line_to(vertex.x, vertex.y);
        }
        painter.stroke()?;
        stats.polylines_drawn += 1;
    }

    // One fill per run of same-colored markers.
    for run in frame
        .markers
        .chunk_by(|left, right| left.color == right.color)
    {
        paint_marker_run(painter, run)?;
        stats.markers_drawn += run.len();
    }

    painter.restore()?;

    for text in &frame.texts {
        painter.set_font(&Font::sans(text.font_size_px));
        painter.set_fill_style(text.color);
        let width = match text.h_align {
            TextHAlign::Left => 0.0,
            TextHAlign::Center => painter.measure_text(&text.text) / 2.0,
            TextHAlign::Right => painter.measure_text(&text.text),
        };
        painter.fill_text(&text.text, text.x - width, text.y)?;
        stats.texts_drawn += 1;
    }

    Ok(stats)
}

fn paint_marker_run<P: Painter>(painter: &mut P, run: &[MarkerPrimitive]) -> ViewportResult<()> {
    let Some(first) = run.first() else {
        return Ok(());
    };
    painter.set_fill_style(first.color);
    painter.begin_path();
    for marker in run {
        painter.move_to(marker.x + marker.radius, marker.y);
        painter.arc(marker.x, marker.y, marker.radius, 0.0, TAU);
    }
    painter.fill()
}
