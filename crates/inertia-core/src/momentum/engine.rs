//! Molecular layer: momentum scroll engine
//!
//! Wires input capture, the velocity integrator, position clamping and the
//! frame scheduler around one `ScrollState`. All entry points take `&mut self`
//! and run to completion; the host delivers wheel events and frame callbacks
//! one at a time.

use tracing::{debug, trace};

use crate::config::ScrollConfig;

use super::bounds;
use super::frames::QueuedFrames;
use super::host::{FrameId, FrameScheduler, ScrollHost, WheelEvent};
use super::physics::{self, Decay};
use super::state::{Phase, ScrollState};

/// Upper limit for `settle`, far beyond any glide a valid config produces
const MAX_SETTLE_TICKS: u32 = 100_000;

/// What a wheel event did to the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelOutcome {
    /// Engine detached; the event was left to the host
    Ignored,
    /// Captured and folded into the velocity, no new frame requested
    Absorbed,
    /// Captured and the animation loop was started
    Started,
}

/// Momentum scroll engine
///
/// Call `start()` to begin capturing wheel input, feed every wheel event to
/// `handle_wheel()` and every delivered frame to `on_frame()`. The engine
/// keeps at most one frame request outstanding and stops requesting frames
/// once the velocity has decayed below the stop threshold.
#[derive(Debug)]
pub struct MomentumEngine<H: ScrollHost, F: FrameScheduler> {
    config: ScrollConfig,
    state: ScrollState,
    pending: Option<FrameId>,
    attached: bool,
    host: H,
    frames: F,
}

impl<H: ScrollHost, F: FrameScheduler> MomentumEngine<H, F> {
    /// Create a detached engine at the host's current offset
    ///
    /// The config is expected to have passed `ScrollConfig::validate`.
    pub fn new(config: ScrollConfig, host: H, frames: F) -> Self {
        let state = ScrollState::at(host.scroll_offset());
        Self {
            config,
            state,
            pending: None,
            attached: false,
            host,
            frames,
        }
    }

    /// Begin capturing wheel input
    pub fn start(&mut self) {
        if self.attached {
            return;
        }
        self.attached = true;
        self.state.position = self.host.scroll_offset();
        debug!(position = self.state.position, "Momentum scrolling attached");
    }

    /// Stop capturing wheel input and cancel any pending frame
    pub fn stop(&mut self) {
        if !self.attached {
            return;
        }
        self.halt();
        self.attached = false;
        debug!(position = self.state.position, "Momentum scrolling detached");
    }

    /// Input capture: turn a wheel event into a velocity impulse
    pub fn handle_wheel(&mut self, event: &mut WheelEvent) -> WheelOutcome {
        if !self.attached {
            return WheelOutcome::Ignored;
        }
        event.prevent_default();

        // Absorb offset changes made behind the engine's back
        self.state.position = self.host.scroll_offset();

        let impulse = physics::impulse(event.delta_y, &self.config);
        self.state.velocity = physics::apply_impulse(self.state.velocity, impulse, &self.config);
        trace!(
            delta = event.delta_y,
            impulse,
            velocity = self.state.velocity,
            "Wheel impulse"
        );

        if self.pending.is_none() && physics::is_moving(self.state.velocity, &self.config) {
            self.schedule();
            debug!(velocity = self.state.velocity, "Glide started");
            WheelOutcome::Started
        } else {
            WheelOutcome::Absorbed
        }
    }

    /// Frame tick: move, clamp, apply, decay, then re-arm or go idle
    ///
    /// Frames other than the one currently pending are ignored.
    pub fn on_frame(&mut self, id: FrameId) -> Phase {
        if self.pending != Some(id) {
            trace!(frame = id.0, "Ignoring stale frame");
            return self.phase();
        }
        self.pending = None;

        let next = bounds::step(
            self.state.position,
            self.state.velocity,
            self.host.scroll_height(),
            self.host.viewport_height(),
        );
        self.host.set_scroll_offset(next);
        self.state.position = next;

        match physics::decay(self.state.velocity, &self.config) {
            Decay::Continue(velocity) => {
                self.state.velocity = velocity;
                trace!(position = next, velocity, "Tick");
                self.schedule();
            }
            Decay::Stop => {
                self.state.velocity = 0.0;
                self.state.animating = false;
                debug!(position = next, "Glide came to rest");
            }
        }

        self.phase()
    }

    /// Jump to an offset immediately, cancelling any glide
    pub fn set_scroll(&mut self, offset: f64) {
        self.halt();
        let max = bounds::max_scroll(self.host.scroll_height(), self.host.viewport_height());
        let offset = bounds::clamp_position(offset, max);
        self.host.set_scroll_offset(offset);
        self.state.position = offset;
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    pub fn state(&self) -> &ScrollState {
        &self.state
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.state.animating
    }

    #[inline]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// The frame the engine is waiting for, if any
    pub fn pending_frame(&self) -> Option<FrameId> {
        self.pending
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn frames(&self) -> &F {
        &self.frames
    }

    pub fn frames_mut(&mut self) -> &mut F {
        &mut self.frames
    }

    fn schedule(&mut self) {
        self.pending = Some(self.frames.request_frame());
        self.state.animating = true;
    }

    fn halt(&mut self) {
        if let Some(id) = self.pending.take() {
            self.frames.cancel_frame(id);
        }
        self.state.velocity = 0.0;
        self.state.animating = false;
    }
}

impl<H: ScrollHost> MomentumEngine<H, QueuedFrames> {
    /// Deliver the next queued frame, returning false when none was pending
    pub fn pump(&mut self) -> bool {
        match self.frames.pop() {
            Some(id) => {
                self.on_frame(id);
                true
            }
            None => false,
        }
    }

    /// Deliver frames until the engine is idle, returning the tick count
    pub fn settle(&mut self) -> u32 {
        let mut ticks = 0;
        while ticks < MAX_SETTLE_TICKS && self.pump() {
            ticks += 1;
        }
        if self.is_animating() {
            tracing::warn!(ticks, "Glide did not settle; check scroll.friction");
        }
        ticks
    }
}

impl<H: ScrollHost, F: FrameScheduler> Drop for MomentumEngine<H, F> {
    fn drop(&mut self) {
        if let Some(id) = self.pending.take() {
            self.frames.cancel_frame(id);
        }
    }
}
