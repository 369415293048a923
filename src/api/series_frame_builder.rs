use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{
    DataPoint, Decimator, GridValues, ViewportModel, format_grid_value, grid_values,
    label_precision, markers_visible, nice_interval,
};
use crate::error::ViewportResult;
use crate::render::{
    LinePrimitive, MarkerPrimitive, PolylinePrimitive, RenderFrame, SurfaceLayer, TextHAlign,
    TextPrimitive,
};

use super::{EngineConfig, GridConfig};

/// Gap between the plot edge and axis labels, logical px.
const LABEL_GAP_PX: f64 = 4.0;

/// Per-frame counters of the series pass.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SeriesFrameStats {
    /// Samples in the padded visible index range.
    pub visible_samples: usize,
    /// Vertices emitted by decimation.
    pub vertices: usize,
    pub markers: usize,
    pub grid_interval_x: Option<f64>,
    pub grid_interval_y: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesFrame {
    pub frame: RenderFrame,
    pub stats: SeriesFrameStats,
}

/// Gridline intervals for the current view, in data units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridIntervals {
    pub x: Option<f64>,
    pub y: Option<f64>,
}

impl GridIntervals {
    pub fn resolve(model: &ViewportModel, grid: GridConfig) -> ViewportResult<Self> {
        let dpr = model.surface().dpr;
        // nice_interval works in logical px so spacing is DPR independent.
        let x_per_px = model.pixel_width_in_data()? * dpr;
        let y_per_px = model.pixel_height_in_data()? * dpr;
        Ok(Self {
            x: nice_interval(x_per_px, grid.min_spacing_px),
            y: nice_interval(y_per_px, grid.min_spacing_px),
        })
    }

    #[must_use]
    pub fn x_precision(self) -> usize {
        self.x.map_or(0, label_precision)
    }

    #[must_use]
    pub fn y_precision(self) -> usize {
        self.y.map_or(0, label_precision)
    }
}

/// Builds the series surface: clear, clip, grid, decimated path, markers.
///
/// An empty dataset yields a frame that only clears the surface.
pub fn build_series_frame(
    model: &ViewportModel,
    points: &[DataPoint],
    config: &EngineConfig,
) -> ViewportResult<SeriesFrame> {
    let surface = model.surface();
    let frame = RenderFrame::new(
        SurfaceLayer::Series,
        surface.physical_width(),
        surface.physical_height(),
    );
    if points.is_empty() {
        debug!("empty dataset: series surface cleared only");
        return Ok(SeriesFrame {
            frame,
            stats: SeriesFrameStats::default(),
        });
    }

    let mut frame = frame.with_clip(model.view_rect_physical());
    let mut stats = SeriesFrameStats::default();

    if config.grid.enabled {
        let intervals = GridIntervals::resolve(model, config.grid)?;
        stats.grid_interval_x = intervals.x;
        stats.grid_interval_y = intervals.y;
        push_grid(&mut frame, model, intervals, config);
    }

    let view = model.view();
    let range = Decimator::visible_range(points, view);
    stats.visible_samples = range.len();
    let decimator = Decimator::new(model.pixel_width_in_data()?)?;
    let projected: Vec<DataPoint> = decimator
        .decimate(points, range)
        .into_iter()
        .map(|vertex| model.project_physical(vertex))
        .collect();
    stats.vertices = projected.len();

    let dpr = surface.dpr;
    let style = config.style;
    if config.markers.enabled
        && markers_visible(&projected, config.markers.visibility_threshold_px * dpr)
    {
        frame.markers.extend(projected.iter().map(|vertex| {
            MarkerPrimitive::new(
                vertex.x,
                vertex.y,
                config.markers.radius_px * dpr,
                style.marker_color,
            )
        }));
        stats.markers = frame.markers.len();
    }

    frame.polylines.push(PolylinePrimitive::new(
        projected,
        style.series_line_width * dpr,
        style.series_line_color,
    ));

    trace!(
        visible_samples = stats.visible_samples,
        vertices = stats.vertices,
        markers = stats.markers,
        "series frame built"
    );
    Ok(SeriesFrame { frame, stats })
}

fn push_grid(
    frame: &mut RenderFrame,
    model: &ViewportModel,
    intervals: GridIntervals,
    config: &EngineConfig,
) {
    let Some(clip) = frame.clip else {
        return;
    };
    let view = model.view();
    let dpr = model.surface().dpr;
    let style = config.style;
    let font_size = config.grid.label_font_size_px * dpr;
    let gap = LABEL_GAP_PX * dpr;
    let line_width = style.grid_line_width * dpr;

    let xs: GridValues = intervals
        .x
        .map(|interval| grid_values(view.x, view.right(), interval))
        .unwrap_or_default();
    let x_precision = intervals.x_precision();
    for value in xs {
        let x = model.project_physical(DataPoint::new(value, view.y)).x;
        frame.lines.push(LinePrimitive::new(
            x,
            clip.y,
            x,
            clip.top(),
            line_width,
            style.grid_line_color,
        ));
        frame.texts.push(TextPrimitive::new(
            format_grid_value(value, x_precision),
            x,
            clip.top() + gap + font_size,
            font_size,
            style.grid_label_color,
            TextHAlign::Center,
        ));
    }

    let ys: GridValues = intervals
        .y
        .map(|interval| grid_values(view.y, view.top(), interval))
        .unwrap_or_default();
    let y_precision = intervals.y_precision();
    for value in ys {
        let y = model.project_physical(DataPoint::new(view.x, value)).y;
        frame.lines.push(LinePrimitive::new(
            clip.x,
            y,
            clip.right(),
            y,
            line_width,
            style.grid_line_color,
        ));
        frame.texts.push(TextPrimitive::new(
            format_grid_value(value, y_precision),
            clip.right() + gap,
            y + font_size * 0.35,
            font_size,
            style.grid_label_color,
            TextHAlign::Left,
        ));
    }
}
