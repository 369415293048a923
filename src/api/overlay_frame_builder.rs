use crate::core::{DataPoint, Rect, ViewportModel, format_grid_value};
use crate::error::ViewportResult;
use crate::interaction::CrosshairState;
use crate::render::{
    LinePrimitive, MarkerPrimitive, RectPrimitive, RenderFrame, SurfaceLayer, TextHAlign,
    TextPrimitive,
};

use super::{EngineConfig, GridIntervals};

/// Offset of the readout label from the snapped sample, logical px.
const LABEL_OFFSET_PX: f64 = 6.0;

/// Readout text for a sample, `x, y`, using the grid label precision.
#[must_use]
pub fn crosshair_label(sample: DataPoint, intervals: GridIntervals) -> String {
    format!(
        "{}, {}",
        format_grid_value(sample.x, intervals.x_precision()),
        format_grid_value(sample.y, intervals.y_precision())
    )
}

/// Builds the transparent overlay: drag selection, crosshair guides through the
/// snapped sample, highlight dot and readout label.
pub fn build_overlay_frame(
    model: &ViewportModel,
    crosshair: CrosshairState,
    selection: Option<Rect>,
    config: &EngineConfig,
) -> ViewportResult<RenderFrame> {
    let surface = model.surface();
    let dpr = surface.dpr;
    let style = config.style;
    let clip = model.view_rect_physical();
    let mut frame = RenderFrame::new(
        SurfaceLayer::Overlay,
        surface.physical_width(),
        surface.physical_height(),
    )
    .with_clip(clip);

    if let Some(selection) = selection {
        let rect = Rect::from_corners(
            model.project_physical(selection.origin()),
            model.project_physical(DataPoint::new(selection.right(), selection.top())),
        );
        frame.rects.push(
            RectPrimitive::filled(rect, style.selection_fill_color)
                .with_border(style.selection_border_width * dpr, style.selection_border_color),
        );
    }

    let Some(snap) = crosshair.snap.filter(|_| crosshair.visible) else {
        return Ok(frame);
    };
    let x = snap.x * dpr;
    let y = snap.y * dpr;
    let line_width = style.crosshair_line_width * dpr;
    frame.lines.push(LinePrimitive::new(
        x,
        clip.y,
        x,
        clip.top(),
        line_width,
        style.crosshair_line_color,
    ));
    frame.lines.push(LinePrimitive::new(
        clip.x,
        y,
        clip.right(),
        y,
        line_width,
        style.crosshair_line_color,
    ));
    frame.markers.push(MarkerPrimitive::new(
        x,
        y,
        style.crosshair_dot_radius * dpr,
        style.crosshair_dot_color,
    ));

    if clip.contains(DataPoint::new(x, y)) {
        let intervals = GridIntervals::resolve(model, config.grid)?;
        let offset = LABEL_OFFSET_PX * dpr;
        // Flip the label to the left of the sample on the right half.
        let (label_x, h_align) = if x > clip.center().x {
            (x - offset, TextHAlign::Right)
        } else {
            (x + offset, TextHAlign::Left)
        };
        frame.texts.push(TextPrimitive::new(
            crosshair_label(snap.sample, intervals),
            label_x,
            y - offset,
            config.grid.label_font_size_px * dpr,
            style.crosshair_label_color,
            h_align,
        ));
    }
    Ok(frame)
}
