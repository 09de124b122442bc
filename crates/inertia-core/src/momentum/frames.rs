//! Boundary layer: frame schedulers
//!
//! `QueuedFrames` is pumped by hand (tests, headless simulation).
//! `IntervalFrames` is the fixed-interval fallback for hosts without a
//! display-synchronised callback: it hands out deadlines that an event loop
//! sleeps towards and reports the frame once its deadline has passed.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use super::host::{FrameId, FrameScheduler};

/// Frame requests queued until the caller delivers them
#[derive(Debug, Clone, Default)]
pub struct QueuedFrames {
    next_id: u64,
    pending: VecDeque<FrameId>,
    requested: u64,
    cancelled: u64,
    max_pending: usize,
}

impl QueuedFrames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the oldest pending frame for delivery
    pub fn pop(&mut self) -> Option<FrameId> {
        self.pending.pop_front()
    }

    /// Frames requested but not yet delivered or cancelled
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Total frames ever requested
    pub fn requested(&self) -> u64 {
        self.requested
    }

    /// Total frames cancelled before delivery
    pub fn cancelled(&self) -> u64 {
        self.cancelled
    }

    /// Highest number of simultaneously pending frames observed
    pub fn max_pending(&self) -> usize {
        self.max_pending
    }
}

impl FrameScheduler for QueuedFrames {
    fn request_frame(&mut self) -> FrameId {
        self.next_id += 1;
        let id = FrameId(self.next_id);
        self.pending.push_back(id);
        self.requested += 1;
        self.max_pending = self.max_pending.max(self.pending.len());
        id
    }

    fn cancel_frame(&mut self, id: FrameId) {
        let before = self.pending.len();
        self.pending.retain(|pending| *pending != id);
        if self.pending.len() < before {
            self.cancelled += 1;
        }
    }
}

/// Fixed-interval frame timer
///
/// Time only moves when the owner reports a clock reading through
/// `observe` or `take_due`, which keeps it deterministic under test.
#[derive(Debug, Clone)]
pub struct IntervalFrames {
    interval: Duration,
    next_id: u64,
    pending: Option<(FrameId, Instant)>,
    now: Instant,
}

impl IntervalFrames {
    pub fn new(interval: Duration) -> Self {
        Self::starting_at(interval, Instant::now())
    }

    pub fn starting_at(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next_id: 0,
            pending: None,
            now,
        }
    }

    /// Record the current time; readings older than the last one are ignored
    pub fn observe(&mut self, now: Instant) {
        if now > self.now {
            self.now = now;
        }
    }

    /// Whether a frame is waiting for its deadline
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Time left until the pending frame is due, if any
    pub fn timeout(&self, now: Instant) -> Option<Duration> {
        self.pending
            .map(|(_, deadline)| deadline.saturating_duration_since(now))
    }

    /// Take the pending frame if its deadline has passed
    pub fn take_due(&mut self, now: Instant) -> Option<FrameId> {
        self.observe(now);
        match self.pending {
            Some((id, deadline)) if deadline <= self.now => {
                self.pending = None;
                Some(id)
            }
            _ => None,
        }
    }
}

impl FrameScheduler for IntervalFrames {
    fn request_frame(&mut self) -> FrameId {
        self.next_id += 1;
        let id = FrameId(self.next_id);
        if let Some((stale, _)) = self.pending {
            tracing::warn!(
                stale = stale.0,
                replacement = id.0,
                "Frame requested while another was pending"
            );
        }
        self.pending = Some((id, self.now + self.interval));
        id
    }

    fn cancel_frame(&mut self, id: FrameId) {
        if matches!(self.pending, Some((pending, _)) if pending == id) {
            self.pending = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queued_frames_fifo() {
        let mut frames = QueuedFrames::new();
        let a = frames.request_frame();
        let b = frames.request_frame();
        assert_ne!(a, b);
        assert_eq!(frames.max_pending(), 2);
        assert_eq!(frames.pop(), Some(a));
        assert_eq!(frames.pop(), Some(b));
        assert_eq!(frames.pop(), None);
    }

    #[test]
    fn test_queued_frames_cancel() {
        let mut frames = QueuedFrames::new();
        let a = frames.request_frame();
        frames.cancel_frame(a);
        frames.cancel_frame(a);
        assert_eq!(frames.pending_count(), 0);
        assert_eq!(frames.cancelled(), 1);
        assert_eq!(frames.requested(), 1);
    }

    #[test]
    fn test_interval_frame_due_after_interval() {
        let start = Instant::now();
        let mut frames = IntervalFrames::starting_at(Duration::from_millis(16), start);
        let id = frames.request_frame();

        assert_eq!(frames.timeout(start), Some(Duration::from_millis(16)));
        assert_eq!(frames.take_due(start + Duration::from_millis(10)), None);
        assert_eq!(
            frames.timeout(start + Duration::from_millis(10)),
            Some(Duration::from_millis(6))
        );
        assert_eq!(frames.take_due(start + Duration::from_millis(16)), Some(id));
        assert!(!frames.is_pending());
        assert_eq!(frames.timeout(start + Duration::from_millis(16)), None);
    }

    #[test]
    fn test_interval_rearm_counts_from_delivery() {
        let start = Instant::now();
        let mut frames = IntervalFrames::starting_at(Duration::from_millis(16), start);
        frames.request_frame();
        // Delivered late
        let late = start + Duration::from_millis(40);
        assert!(frames.take_due(late).is_some());
        frames.request_frame();
        assert_eq!(frames.timeout(late), Some(Duration::from_millis(16)));
    }

    #[test]
    fn test_interval_cancel() {
        let start = Instant::now();
        let mut frames = IntervalFrames::starting_at(Duration::from_millis(16), start);
        let id = frames.request_frame();
        frames.cancel_frame(FrameId(id.0 + 7));
        assert!(frames.is_pending());
        frames.cancel_frame(id);
        assert!(!frames.is_pending());
        assert_eq!(frames.take_due(start + Duration::from_secs(1)), None);
    }

    #[test]
    fn test_observe_ignores_older_readings() {
        let start = Instant::now();
        let mut frames = IntervalFrames::starting_at(Duration::from_millis(16), start);
        frames.observe(start + Duration::from_millis(100));
        frames.observe(start);
        frames.request_frame();
        assert_eq!(
            frames.timeout(start + Duration::from_millis(100)),
            Some(Duration::from_millis(16))
        );
    }
}
