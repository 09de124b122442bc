//! Atomic layer: scrollable range and position clamping

/// Largest valid scroll offset for the given measurements
///
/// Content that fits the viewport, a negative extent from a mid-layout
/// measurement, or a NaN measurement all collapse the range to `[0, 0]`.
#[inline]
pub fn max_scroll(scroll_height: f64, viewport_height: f64) -> f64 {
    let extent = scroll_height - viewport_height;
    if extent.is_finite() && extent > 0.0 {
        extent
    } else {
        0.0
    }
}

/// Clamp a candidate offset into `[0, max_scroll]`
#[inline]
pub fn clamp_position(next: f64, max_scroll: f64) -> f64 {
    let max_scroll = if max_scroll > 0.0 { max_scroll } else { 0.0 };
    if next.is_nan() {
        return 0.0;
    }
    next.min(max_scroll).max(0.0)
}

/// Advance `position` by `velocity` and clamp against the current measurements
#[inline]
pub fn step(position: f64, velocity: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    clamp_position(position + velocity, max_scroll(scroll_height, viewport_height))
}
