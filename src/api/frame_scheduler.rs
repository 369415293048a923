use serde::{Deserialize, Serialize};
use tracing::trace;

/// Which surfaces a scheduled frame repaints.
///
/// Ordered so merging two requests keeps the wider scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RenderScope {
    /// Crosshair/selection overlay only; the series surface is untouched.
    Overlay,
    /// Series surface and overlay.
    Full,
}

impl RenderScope {
    #[must_use]
    pub const fn max(self, other: Self) -> Self {
        if self as u8 >= other as u8 {
            self
        } else {
            other
        }
    }

    #[must_use]
    pub const fn includes_series(self) -> bool {
        matches!(self, Self::Full)
    }
}

/// Handle for one scheduled frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrameTicket(u64);

impl FrameTicket {
    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FrameSchedulerStats {
    pub requests: u64,
    /// Pending frames replaced by a newer request before they fired.
    pub cancelled: u64,
    pub fired: u64,
    /// Fire attempts with a ticket that was no longer pending.
    pub stale: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingFrame {
    ticket: FrameTicket,
    scope: RenderScope,
}

/// Single-slot request-next-frame scheduler.
///
/// At most one frame is pending. Each request cancels the pending one and
/// takes its place, so any number of requests between two animation frames
/// produce exactly one paint reflecting the latest state.
#[derive(Debug, Clone, Default)]
pub struct FrameScheduler {
    next_ticket: u64,
    pending: Option<PendingFrame>,
    stats: FrameSchedulerStats,
}

impl FrameScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&mut self, scope: RenderScope) -> FrameTicket {
        self.stats.requests += 1;
        let scope = match self.pending.take() {
            Some(previous) => {
                self.stats.cancelled += 1;
                trace!(cancelled = previous.ticket.id(), "pending frame replaced");
                previous.scope.max(scope)
            }
            None => scope,
        };

        self.next_ticket += 1;
        let ticket = FrameTicket(self.next_ticket);
        self.pending = Some(PendingFrame { ticket, scope });
        ticket
    }

    /// Consumes the pending frame, if any, returning its merged scope.
    pub fn take_due(&mut self) -> Option<RenderScope> {
        let pending = self.pending.take()?;
        self.stats.fired += 1;
        Some(pending.scope)
    }

    /// Fires `ticket` if it is still the pending frame; stale tickets are
    /// ignored.
    pub fn fire(&mut self, ticket: FrameTicket) -> Option<RenderScope> {
        match self.pending {
            Some(pending) if pending.ticket == ticket => self.take_due(),
            _ => {
                self.stats.stale += 1;
                None
            }
        }
    }

    /// Drops the pending frame without painting.
    pub fn cancel(&mut self) -> bool {
        let cancelled = self.pending.take().is_some();
        if cancelled {
            self.stats.cancelled += 1;
        }
        cancelled
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub fn pending_scope(&self) -> Option<RenderScope> {
        self.pending.map(|pending| pending.scope)
    }

    #[must_use]
    pub fn pending_ticket(&self) -> Option<FrameTicket> {
        self.pending.map(|pending| pending.ticket)
    }

    #[must_use]
    pub fn stats(&self) -> FrameSchedulerStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::{FrameScheduler, RenderScope};

    #[test]
    fn overlay_request_never_downgrades_pending_full() {
        let mut scheduler = FrameScheduler::new();
        scheduler.request(RenderScope::Full);
        scheduler.request(RenderScope::Overlay);
        assert_eq!(scheduler.take_due(), Some(RenderScope::Full));
        assert_eq!(scheduler.take_due(), None);
    }

    #[test]
    fn stale_ticket_is_ignored() {
        let mut scheduler = FrameScheduler::new();
        let first = scheduler.request(RenderScope::Overlay);
        let second = scheduler.request(RenderScope::Overlay);
        assert_eq!(scheduler.fire(first), None);
        assert_eq!(scheduler.fire(second), Some(RenderScope::Overlay));
        assert_eq!(scheduler.stats().stale, 1);
        assert_eq!(scheduler.stats().cancelled, 1);
    }
}
