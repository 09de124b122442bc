//! Atomic layer: impulse shaping and friction decay
//!
//! Velocity is a single signed scalar in offset units per tick. Nothing here
//! knows about the document or the scheduler.

use crate::config::ScrollConfig;

/// Result of decaying the velocity for one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Decay {
    /// Still moving with the given velocity
    Continue(f64),
    /// Fell below the stop threshold; velocity is now exactly zero
    Stop,
}

/// Saturate `value` to `[-limit, +limit]`
///
/// Unlike `f64::clamp` this never panics, so an unvalidated config degrades
/// instead of aborting the event loop.
#[inline]
pub fn saturate(value: f64, limit: f64) -> f64 {
    value.max(-limit).min(limit)
}

/// Impulse contributed by one wheel event
///
/// Non-finite deltas contribute nothing.
#[inline]
pub fn impulse(delta: f64, config: &ScrollConfig) -> f64 {
    if !delta.is_finite() {
        return 0.0;
    }
    saturate(delta * config.input_scale, config.per_event_impulse_cap)
}

/// Add an impulse to the velocity, holding it within `±max_velocity`
#[inline]
pub fn apply_impulse(velocity: f64, impulse: f64, config: &ScrollConfig) -> f64 {
    saturate(velocity + impulse, config.max_velocity)
}

/// One tick of friction: `v * friction`, snapped to zero below the threshold
#[inline]
pub fn decay(velocity: f64, config: &ScrollConfig) -> Decay {
    let next = velocity * config.friction;
    if next.abs() < config.stop_threshold {
        Decay::Stop
    } else {
        Decay::Continue(next)
    }
}

/// Whether a velocity is large enough to keep the animation loop alive
#[inline]
pub fn is_moving(velocity: f64, config: &ScrollConfig) -> bool {
    velocity.abs() >= config.stop_threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_impulse_is_capped() {
        let config = ScrollConfig::default();
        // 100 * 0.6 = 60, capped to 8
        assert_eq!(impulse(100.0, &config), 8.0);
        assert_eq!(impulse(-100.0, &config), -8.0);
    }

    #[test]
    fn test_small_impulse_is_scaled() {
        let config = ScrollConfig::default();
        assert!((impulse(10.0, &config) - 6.0).abs() < 1e-12);
        assert!((impulse(-5.0, &config) + 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_and_malformed_delta_are_noops() {
        let config = ScrollConfig::default();
        assert_eq!(impulse(0.0, &config), 0.0);
        assert_eq!(impulse(f64::NAN, &config), 0.0);
        assert_eq!(impulse(f64::INFINITY, &config), 0.0);
        assert_eq!(impulse(f64::NEG_INFINITY, &config), 0.0);
    }

    #[test]
    fn test_apply_impulse_limits_velocity() {
        let config = ScrollConfig::default();
        let mut v = 0.0;
        for _ in 0..20 {
            v = apply_impulse(v, 8.0, &config);
        }
        assert_eq!(v, 80.0);
        for _ in 0..40 {
            v = apply_impulse(v, -8.0, &config);
        }
        assert_eq!(v, -80.0);
    }

    #[test]
    fn test_decay_continues_above_threshold() {
        let config = ScrollConfig::default();
        match decay(8.0, &config) {
            Decay::Continue(v) => assert!((v - 7.36).abs() < 1e-12),
            Decay::Stop => panic!("stopped too early"),
        }
    }

    #[test]
    fn test_decay_snaps_below_threshold() {
        let config = ScrollConfig::default();
        // 0.105 * 0.92 = 0.0966
        assert_eq!(decay(0.105, &config), Decay::Stop);
        assert_eq!(decay(-0.105, &config), Decay::Stop);
        assert_eq!(decay(0.0, &config), Decay::Stop);
    }

    #[test]
    fn test_is_moving_threshold_inclusive() {
        let config = ScrollConfig::default();
        assert!(is_moving(0.1, &config));
        assert!(is_moving(-0.1, &config));
        assert!(!is_moving(0.099, &config));
    }

    #[test]
    fn test_saturate_with_bad_limit_does_not_panic() {
        // A negative limit is a misconfiguration; the result is degenerate
        // but the call must not panic.
        let _ = saturate(1.0, -1.0);
        assert!(saturate(f64::NAN, 5.0).abs() <= 5.0);
    }
}
