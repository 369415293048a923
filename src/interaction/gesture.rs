use tracing::{debug, trace};

use crate::core::{AxisLock, DataPoint, GestureIntent, Rect, ViewportModel, nearest_index};
use crate::error::{ViewportError, ViewportResult};
use crate::interaction::{
    CrosshairSnap, CrosshairState, GestureConfig, InteractionMode, PointerEvent, RevealedEdge,
};

/// Wheel input classified into a view mutation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelGesture {
    pub intent: GestureIntent,
    /// Set for horizontal pans when edge auto-follow is enabled.
    pub revealed_edge: Option<RevealedEdge>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct DragAnchor {
    logical: DataPoint,
    data: DataPoint,
}

/// Translates normalized pointer and wheel events into view intents.
///
/// The controller never mutates the model: it reads transforms through the
/// model's public contract and hands intents back to the caller.
#[derive(Debug, Clone, Default)]
pub struct GestureController {
    config: GestureConfig,
    mode: InteractionMode,
    drag_start: Option<DragAnchor>,
    drag_current: Option<DataPoint>,
    crosshair: CrosshairState,
}

impl GestureController {
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn config(&self) -> GestureConfig {
        self.config
    }

    pub fn set_config(&mut self, config: GestureConfig) {
        self.config = config;
    }

    #[must_use]
    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    #[must_use]
    pub fn crosshair(&self) -> CrosshairState {
        self.crosshair
    }

    /// Classifies a wheel event.
    ///
    /// With the zoom modifier held this is an anchored scale around the
    /// cursor; otherwise the pixel delta becomes a data-space pan. Returns
    /// `None` for an all-zero delta.
    pub fn wheel(
        &self,
        event: PointerEvent,
        model: &ViewportModel,
    ) -> ViewportResult<Option<WheelGesture>> {
        ensure_finite(event)?;
        if event.delta_x == 0.0 && event.delta_y == 0.0 {
            return Ok(None);
        }

        if self.config.zoom_modifier.is_held(event.modifiers) {
            if event.delta_y == 0.0 {
                return Ok(None);
            }
            let factor = (1.0 + event.delta_y * self.config.zoom_sensitivity)
                .max(self.config.min_zoom_factor);
            let anchor = model.try_unproject(event.client_x, event.client_y)?;
            let axis_lock = if self.config.x_only_zoom_modifier.is_held(event.modifiers) {
                AxisLock::LockY
            } else {
                AxisLock::Free
            };
            trace!(factor, ?axis_lock, "wheel zoom");
            return Ok(Some(WheelGesture {
                intent: GestureIntent::ScaleAroundAnchor {
                    factor,
                    axis_lock,
                    anchor,
                },
                revealed_edge: None,
            }));
        }

        let dpr = model.surface().dpr;
        let delta = model.physical_delta_to_data(event.delta_x * dpr, event.delta_y * dpr)?;
        let horizontal = event.delta_x != 0.0 && event.delta_x.abs() >= event.delta_y.abs();
        let revealed_edge = (self.config.edge_follow && horizontal).then(|| {
            if delta.x > 0.0 {
                RevealedEdge::Right
            } else {
                RevealedEdge::Left
            }
        });
        Ok(Some(WheelGesture {
            intent: GestureIntent::Pan {
                dx: delta.x,
                dy: delta.y,
            },
            revealed_edge,
        }))
    }

    /// Records the drag start in data space.
    pub fn pointer_down(&mut self, event: PointerEvent, model: &ViewportModel) -> ViewportResult<()> {
        ensure_finite(event)?;
        let data = model.try_unproject(event.client_x, event.client_y)?;
        self.drag_start = Some(DragAnchor {
            logical: DataPoint::new(event.client_x, event.client_y),
            data,
        });
        self.drag_current = Some(data);
        self.mode = InteractionMode::Selecting;
        Ok(())
    }

    /// Ends a drag, producing the zoom-to-selection rectangle.
    ///
    /// No-op when no drag start was captured or the drag is shorter than the
    /// configured minimum distance.
    pub fn pointer_up(
        &mut self,
        event: PointerEvent,
        model: &ViewportModel,
    ) -> ViewportResult<Option<GestureIntent>> {
        self.mode = InteractionMode::Idle;
        self.drag_current = None;
        let Some(start) = self.drag_start.take() else {
            return Ok(None);
        };
        ensure_finite(event)?;

        let distance = (event.client_x - start.logical.x).hypot(event.client_y - start.logical.y);
        if distance < self.config.min_drag_distance_px {
            debug!(distance, "drag below minimum distance ignored");
            return Ok(None);
        }

        let end = model.try_unproject(event.client_x, event.client_y)?;
        Ok(Some(GestureIntent::SetViewRect {
            rect: Rect::from_corners(start.data, end),
        }))
    }

    /// Moves the crosshair to the cursor and snaps it to the nearest sample.
    pub fn pointer_move(
        &mut self,
        event: PointerEvent,
        model: &ViewportModel,
        points: &[DataPoint],
    ) -> ViewportResult<CrosshairState> {
        ensure_finite(event)?;
        let data = model.try_unproject(event.client_x, event.client_y)?;
        if self.mode == InteractionMode::Selecting {
            self.drag_current = Some(data);
        }
        self.crosshair = crosshair_at(event.client_x, event.client_y, data, model, points);
        Ok(self.crosshair)
    }

    /// Hides the crosshair. An active drag keeps its start position.
    pub fn pointer_leave(&mut self) {
        self.crosshair = CrosshairState::hidden();
    }

    /// Re-snaps a visible crosshair after the view changed under a still cursor.
    pub fn refresh_crosshair(
        &mut self,
        model: &ViewportModel,
        points: &[DataPoint],
    ) -> ViewportResult<()> {
        if !self.crosshair.visible {
            return Ok(());
        }
        let (x, y) = (self.crosshair.x, self.crosshair.y);
        let data = model.try_unproject(x, y)?;
        self.crosshair = crosshair_at(x, y, data, model, points);
        Ok(())
    }

    /// Data-space rectangle between the drag start and the latest cursor.
    #[must_use]
    pub fn selection(&self) -> Option<Rect> {
        let start = self.drag_start?;
        let current = self.drag_current?;
        Some(Rect::from_corners(start.data, current))
    }

    /// Drops any in-progress drag.
    pub fn cancel_selection(&mut self) {
        self.drag_start = None;
        self.drag_current = None;
        self.mode = InteractionMode::Idle;
    }
}

fn crosshair_at(
    x: f64,
    y: f64,
    data: DataPoint,
    model: &ViewportModel,
    points: &[DataPoint],
) -> CrosshairState {
    let snap = nearest_index(points, data.x).map(|index| {
        let sample = points[index];
        let projected = model.project(sample);
        CrosshairSnap {
            index,
            sample,
            x: projected.x,
            y: projected.y,
        }
    });
    CrosshairState {
        visible: true,
        x,
        y,
        data: Some(data),
        snap,
    }
}

fn ensure_finite(event: PointerEvent) -> ViewportResult<()> {
    if event.is_finite() {
        Ok(())
    } else {
        Err(ViewportError::InvalidData(format!(
            "pointer event must be finite, got {event:?}"
        )))
    }
}
