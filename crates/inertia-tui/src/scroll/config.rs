//! Terminal-specific helpers over the UI configuration

use std::time::Duration;

pub use inertia_core::config::UiConfig;

/// Extension trait for UiConfig with utility methods
pub trait UiConfigExt {
    /// Frame period for the fixed-interval scheduler
    fn frame_interval(&self) -> Duration;

    /// Wheel delta for a number of notches (negative = up)
    fn notch_delta(&self, notches: i32) -> f64;
}

impl UiConfigExt for UiConfig {
    #[inline]
    fn frame_interval(&self) -> Duration {
        if self.frame_interval_ms == 0 {
            Duration::from_millis(16) // ~60fps fallback
        } else {
            Duration::from_millis(self.frame_interval_ms)
        }
    }

    #[inline]
    fn notch_delta(&self, notches: i32) -> f64 {
        self.wheel_delta * notches as f64
    }
}
