//! Boundary layer: the environment the engine scrolls
//!
//! A host owns the real scroll offset and the document measurements; a frame
//! scheduler delivers single-shot frame callbacks. Both are re-read on every
//! tick, so content that grows mid-glide is respected.

/// Read/write access to the scrolled document
pub trait ScrollHost {
    /// Current vertical scroll offset
    fn scroll_offset(&self) -> f64;

    /// Apply a new vertical scroll offset
    fn set_scroll_offset(&mut self, offset: f64);

    /// Total scrollable content height
    fn scroll_height(&self) -> f64;

    /// Visible viewport height
    fn viewport_height(&self) -> f64;
}

/// Identifier of one requested frame callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameId(pub u64);

/// Single-shot frame callback requests
///
/// The scheduler only records requests; the host's event loop later hands
/// the returned id back to `MomentumEngine::on_frame`.
pub trait FrameScheduler {
    /// Request one frame callback
    fn request_frame(&mut self) -> FrameId;

    /// Cancel a previously requested callback that has not fired yet
    fn cancel_frame(&mut self, id: FrameId);
}

/// A wheel input event
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WheelEvent {
    /// Vertical delta, positive = scroll down
    pub delta_y: f64,
    default_prevented: bool,
}

impl WheelEvent {
    pub fn new(delta_y: f64) -> Self {
        Self {
            delta_y,
            default_prevented: false,
        }
    }

    /// Suppress the host's native scroll for this event
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// In-memory document with fixed measurements
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryPage {
    pub offset: f64,
    pub scroll_height: f64,
    pub viewport_height: f64,
    /// Number of offset writes applied
    pub writes: u64,
}

impl MemoryPage {
    pub fn new(offset: f64, scroll_height: f64, viewport_height: f64) -> Self {
        Self {
            offset,
            scroll_height,
            viewport_height,
            writes: 0,
        }
    }
}

impl ScrollHost for MemoryPage {
    fn scroll_offset(&self) -> f64 {
        self.offset
    }

    fn set_scroll_offset(&mut self, offset: f64) {
        self.offset = offset;
        self.writes += 1;
    }

    fn scroll_height(&self) -> f64 {
        self.scroll_height
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_height
    }
}
