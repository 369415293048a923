use tracing::{debug, warn};

use crate::core::{
    AxisLock, DataPoint, GestureIntent, PinnedAxis, Rect, Surface, ViewportModel,
    domain_from_points,
};
use crate::error::{ViewportError, ViewportResult};
use crate::interaction::{CrosshairState, GestureController, InteractionMode};
use crate::render::Renderer;

use super::{
    EngineConfig, FrameScheduler, FrameSchedulerStats, FrameTicket, RenderScope, RenderStyle,
    SeriesFrameStats, build_overlay_frame, build_series_frame,
};

/// Main orchestration facade consumed by host applications.
///
/// Owns the dataset, the viewport model, gesture state and the frame
/// scheduler. Every view mutation re-derives the transforms before it returns
/// and schedules a full repaint; cursor-only changes schedule an overlay
/// repaint.
pub struct ViewportEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: EngineConfig,
    pub(super) points: Vec<DataPoint>,
    pub(super) model: ViewportModel,
    pub(super) gestures: GestureController,
    pub(super) scheduler: FrameScheduler,
    pub(super) last_series_stats: SeriesFrameStats,
}

impl<R: Renderer> ViewportEngine<R> {
    /// Creates an engine over `points`, which must be finite and sorted by
    /// non-decreasing x.
    pub fn new(renderer: R, points: Vec<DataPoint>, config: EngineConfig) -> ViewportResult<Self> {
        config.validate()?;
        if !renderer.is_available() {
            return Err(ViewportError::Configuration(
                "rendering backend has no usable drawing context".to_owned(),
            ));
        }
        validate_points(&points)?;

        let domain = domain_from_points(&points);
        let mut model = ViewportModel::new(domain, config.surface, config.padding)?;
        model.set_pinned_axis(config.pinned_axis)?;
        debug!(points = points.len(), ?domain, "viewport engine initialized");

        let mut scheduler = FrameScheduler::new();
        scheduler.request(RenderScope::Full);
        Ok(Self {
            renderer,
            gestures: GestureController::new(config.gestures),
            config,
            points,
            model,
            scheduler,
            last_series_stats: SeriesFrameStats::default(),
        })
    }

    /// Applies a new surface size; transforms are re-derived before any frame
    /// can observe them and a full repaint replaces whatever was pending.
    pub fn resize(&mut self, width: f64, height: f64, dpr: f64) -> ViewportResult<()> {
        self.model.resize(width, height, dpr)?;
        self.config.surface = self.model.surface();
        self.after_view_change()
    }

    pub fn translate_view(&mut self, dx: f64, dy: f64) -> ViewportResult<Rect> {
        let view = self.model.translate_view(dx, dy)?;
        self.after_view_change()?;
        Ok(view)
    }

    pub fn scale_view(
        &mut self,
        factor: f64,
        anchor: DataPoint,
        axis_lock: AxisLock,
    ) -> ViewportResult<Rect> {
        let view = self.model.scale_view(factor, anchor, axis_lock)?;
        self.after_view_change()?;
        Ok(view)
    }

    pub fn set_view(&mut self, rect: Rect) -> ViewportResult<Rect> {
        let view = self.model.set_view(rect);
        self.after_view_change()?;
        Ok(view)
    }

    pub fn reset_view(&mut self) -> ViewportResult<Rect> {
        let view = self.model.reset_view();
        self.after_view_change()?;
        Ok(view)
    }

    pub fn apply_intent(&mut self, intent: GestureIntent) -> ViewportResult<Rect> {
        let view = self.model.apply_intent(intent)?;
        self.after_view_change()?;
        Ok(view)
    }

    pub fn set_pinned_axis(&mut self, pinned_axis: Option<PinnedAxis>) -> ViewportResult<()> {
        self.model.set_pinned_axis(pinned_axis)?;
        self.config.pinned_axis = pinned_axis;
        self.after_view_change()
    }

    pub fn set_render_style(&mut self, style: RenderStyle) -> ViewportResult<()> {
        style.validate()?;
        self.config.style = style;
        self.scheduler.request(RenderScope::Full);
        Ok(())
    }

    /// Schedules a full repaint for the next animation frame, cancelling any
    /// frame already pending.
    pub fn request_render(&mut self) -> FrameTicket {
        self.scheduler.request(RenderScope::Full)
    }

    /// Schedules a repaint of the overlay surface only.
    pub fn request_overlay_render(&mut self) -> FrameTicket {
        self.scheduler.request(RenderScope::Overlay)
    }

    /// Host animation-frame callback. Paints the pending frame, if any.
    pub fn on_animation_frame(&mut self) -> ViewportResult<bool> {
        match self.scheduler.take_due() {
            Some(scope) => {
                self.paint(scope)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Fires the callback registered under `ticket`; cancelled tickets paint
    /// nothing.
    pub fn fire_frame(&mut self, ticket: FrameTicket) -> ViewportResult<bool> {
        match self.scheduler.fire(ticket) {
            Some(scope) => {
                self.paint(scope)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Paints both surfaces immediately, dropping any pending frame.
    pub fn render_now(&mut self) -> ViewportResult<()> {
        self.scheduler.cancel();
        self.paint(RenderScope::Full)
    }

    /// Maps a logical surface position to data space.
    ///
    /// `None` means the transform is singular, which valid invariants rule
    /// out; the failure is reported through `tracing`.
    #[must_use]
    pub fn unproject(&self, logical_x: f64, logical_y: f64) -> Option<DataPoint> {
        self.model.unproject(logical_x, logical_y)
    }

    pub fn try_unproject(&self, logical_x: f64, logical_y: f64) -> ViewportResult<DataPoint> {
        self.model.try_unproject(logical_x, logical_y)
    }

    #[must_use]
    pub fn project(&self, point: DataPoint) -> DataPoint {
        self.model.project(point)
    }

    #[must_use]
    pub fn view(&self) -> Rect {
        self.model.view()
    }

    #[must_use]
    pub fn domain(&self) -> Rect {
        self.model.domain()
    }

    #[must_use]
    pub fn surface(&self) -> Surface {
        self.model.surface()
    }

    #[must_use]
    pub fn crosshair(&self) -> CrosshairState {
        self.gestures.crosshair()
    }

    #[must_use]
    pub fn interaction_mode(&self) -> InteractionMode {
        self.gestures.mode()
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    #[must_use]
    pub fn model(&self) -> &ViewportModel {
        &self.model
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn scheduler_stats(&self) -> FrameSchedulerStats {
        self.scheduler.stats()
    }

    #[must_use]
    pub fn has_pending_frame(&self) -> bool {
        self.scheduler.is_pending()
    }

    #[must_use]
    pub fn last_series_stats(&self) -> SeriesFrameStats {
        self.last_series_stats
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    pub(super) fn after_view_change(&mut self) -> ViewportResult<()> {
        self.gestures.refresh_crosshair(&self.model, &self.points)?;
        self.scheduler.request(RenderScope::Full);
        Ok(())
    }

    fn paint(&mut self, scope: RenderScope) -> ViewportResult<()> {
        if scope.includes_series() {
            let series = build_series_frame(&self.model, &self.points, &self.config)?;
            self.renderer.render(&series.frame)?;
            self.last_series_stats = series.stats;
        }
        let overlay = build_overlay_frame(
            &self.model,
            self.gestures.crosshair(),
            self.gestures.selection(),
            &self.config,
        )?;
        self.renderer.render(&overlay)
    }
}

fn validate_points(points: &[DataPoint]) -> ViewportResult<()> {
    if let Some(index) = points.iter().position(|point| !point.is_finite()) {
        return Err(ViewportError::InvalidData(format!(
            "sample {index} is not finite: {:?}",
            points[index]
        )));
    }
    if let Some(index) = points.windows(2).position(|pair| pair[1].x < pair[0].x) {
        warn!(index, "dataset is not sorted by x");
        return Err(ViewportError::InvalidData(format!(
            "samples must be sorted by non-decreasing x (violated at index {})",
            index + 1
        )));
    }
    Ok(())
}
