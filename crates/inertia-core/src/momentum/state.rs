//! Atomic layer: engine state

/// Animation scheduler state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No frame callback pending
    #[default]
    Idle,
    /// Exactly one frame callback pending
    Scheduled,
}

/// Mutable scroll state owned by one engine
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollState {
    /// Current vertical scroll offset
    pub position: f64,
    /// Signed offset change per tick
    pub velocity: f64,
    /// True iff a frame callback is pending
    pub animating: bool,
}

impl ScrollState {
    /// Fresh state at the given offset, at rest
    pub fn at(position: f64) -> Self {
        Self {
            position,
            velocity: 0.0,
            animating: false,
        }
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        if self.animating {
            Phase::Scheduled
        } else {
            Phase::Idle
        }
    }
}
