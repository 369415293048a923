use tracing::trace;

use crate::core::Rect;
use crate::error::ViewportResult;
use crate::interaction::{CrosshairState, GestureConfig, PointerEvent, edge_follow_view};
use crate::render::Renderer;

use super::{RenderScope, ViewportEngine};

impl<R: Renderer> ViewportEngine<R> {
    /// Handles a wheel event: plain wheel pans (with edge auto-follow),
    /// modifier wheel zooms around the cursor.
    ///
    /// Returns `false` when the event carried no delta.
    pub fn handle_wheel(&mut self, event: PointerEvent) -> ViewportResult<bool> {
        let Some(gesture) = self.gestures.wheel(event, &self.model)? else {
            return Ok(false);
        };
        self.model.apply_intent(gesture.intent)?;

        if let Some(edge) = gesture.revealed_edge {
            if let Some(followed) = edge_follow_view(&self.points, self.model.view(), edge) {
                trace!(?edge, ?followed, "edge follow");
                self.model.set_view(followed);
            }
        }
        self.after_view_change()?;
        Ok(true)
    }

    pub fn handle_pointer_down(&mut self, event: PointerEvent) -> ViewportResult<()> {
        self.gestures.pointer_down(event, &self.model)?;
        self.scheduler.request(RenderScope::Overlay);
        Ok(())
    }

    /// Updates the crosshair (and the selection while dragging).
    pub fn handle_pointer_move(&mut self, event: PointerEvent) -> ViewportResult<CrosshairState> {
        let crosshair = self.gestures.pointer_move(event, &self.model, &self.points)?;
        self.scheduler.request(RenderScope::Overlay);
        Ok(crosshair)
    }

    /// Completes a drag-to-zoom. Returns the new view, or `None` when no drag
    /// was in progress.
    pub fn handle_pointer_up(&mut self, event: PointerEvent) -> ViewportResult<Option<Rect>> {
        let intent = self.gestures.pointer_up(event, &self.model)?;
        match intent {
            Some(intent) => {
                let view = self.model.apply_intent(intent)?;
                self.after_view_change()?;
                Ok(Some(view))
            }
            None => {
                self.scheduler.request(RenderScope::Overlay);
                Ok(None)
            }
        }
    }

    /// Hides the crosshair when the pointer leaves the surface.
    pub fn handle_pointer_leave(&mut self) {
        self.gestures.pointer_leave();
        self.scheduler.request(RenderScope::Overlay);
    }

    pub fn cancel_selection(&mut self) {
        self.gestures.cancel_selection();
        self.scheduler.request(RenderScope::Overlay);
    }

    #[must_use]
    pub fn selection(&self) -> Option<Rect> {
        self.gestures.selection()
    }

    #[must_use]
    pub fn gesture_config(&self) -> GestureConfig {
        self.gestures.config()
    }

    pub fn set_gesture_config(&mut self, config: GestureConfig) -> ViewportResult<()> {
        let candidate = self.config.with_gestures(config);
        candidate.validate()?;
        self.config = candidate;
        self.gestures.set_config(config);
        Ok(())
    }
}
