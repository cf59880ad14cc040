//! Redraw coalescing.
//!
//! Input can arrive many times per display refresh. Each request replaces the
//! pending one and pushes its deadline back (trailing debounce), so a burst of
//! events yields one evaluation pass of the latest view.

use deepzoom_core::{EvaluatorStrategy, ViewSnapshot};
use log::debug;
use serde::{Deserialize, Serialize};

/// One evaluation pass: the view copied at request time plus its tier.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrameRequest {
    pub view: ViewSnapshot,
    pub canvas_size: (u32, u32),
    pub strategy: EvaluatorStrategy,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Pending {
    frame: FrameRequest,
    due_ms: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RedrawScheduler {
    debounce_ms: f64,
    pending: Option<Pending>,
    coalesced: u64,
}

impl RedrawScheduler {
    pub fn new(debounce_ms: f64) -> Self {
        Self {
            debounce_ms: debounce_ms.max(0.0),
            pending: None,
            coalesced: 0,
        }
    }

    /// Schedule `frame` after the debounce window, replacing any pending frame.
    pub fn request(&mut self, frame: FrameRequest, now_ms: f64) {
        self.schedule(frame, now_ms + self.debounce_ms);
    }

    /// Schedule `frame` for the next poll regardless of the debounce window.
    pub fn request_immediate(&mut self, frame: FrameRequest, now_ms: f64) {
        self.schedule(frame, now_ms);
    }

    fn schedule(&mut self, frame: FrameRequest, due_ms: f64) {
        if self.pending.is_some() {
            self.coalesced += 1;
            debug!("redraw coalesced ({} so far)", self.coalesced);
        }
        self.pending = Some(Pending { frame, due_ms });
    }

    /// Take the pending frame once its deadline has passed.
    pub fn poll(&mut self, now_ms: f64) -> Option<FrameRequest> {
        match self.pending {
            Some(pending) if pending.due_ms <= now_ms => {
                self.pending = None;
                Some(pending.frame)
            }
            _ => None,
        }
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Requests superseded before they were drawn.
    pub fn coalesced_count(&self) -> u64 {
        self.coalesced
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(zoom: f64) -> FrameRequest {
        FrameRequest {
            view: ViewSnapshot::new(0.0, 0.0, zoom),
            canvas_size: (800, 600),
            strategy: EvaluatorStrategy::NativePrecision,
        }
    }

    #[test]
    fn nothing_pending_initially() {
        let mut scheduler = RedrawScheduler::new(0.0);
        assert!(!scheduler.has_pending());
        assert_eq!(scheduler.poll(0.0), None);
    }

    #[test]
    fn last_request_wins() {
        let mut scheduler = RedrawScheduler::new(0.0);
        scheduler.request(frame(1.0), 0.0);
        scheduler.request(frame(2.0), 1.0);
        scheduler.request(frame(3.0), 2.0);

        assert_eq!(scheduler.poll(2.0), Some(frame(3.0)));
        assert_eq!(scheduler.poll(3.0), None);
        assert_eq!(scheduler.coalesced_count(), 2);
    }

    #[test]
    fn debounce_delays_until_quiet() {
        let mut scheduler = RedrawScheduler::new(100.0);
        scheduler.request(frame(1.0), 0.0);
        assert_eq!(scheduler.poll(50.0), None);
        scheduler.request(frame(2.0), 60.0);
        assert_eq!(scheduler.poll(120.0), None);
        assert_eq!(scheduler.poll(160.0), Some(frame(2.0)));
    }

    #[test]
    fn immediate_request_ignores_window() {
        let mut scheduler = RedrawScheduler::new(100.0);
        scheduler.request_immediate(frame(1.0), 10.0);
        assert_eq!(scheduler.poll(10.0), Some(frame(1.0)));
    }

    #[test]
    fn negative_window_treated_as_zero() {
        let mut scheduler = RedrawScheduler::new(-5.0);
        scheduler.request(frame(1.0), 10.0);
        assert_eq!(scheduler.poll(10.0), Some(frame(1.0)));
    }
}
