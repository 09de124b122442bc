//! Atomic layer: glide analysis
//!
//! Pure functions describing how a single impulse plays out, used by the
//! simulator summary and to check the loop always terminates.

use crate::config::ScrollConfig;

use super::physics::{decay, is_moving, saturate, Decay};

/// Longest glide, in ticks, that a usable configuration may produce
pub const MAX_GLIDE_TICKS: u32 = 10_000;

/// Number of ticks the animation loop runs for an initial velocity
///
/// Iterates the exact per-tick decay, so the result matches the engine to
/// the last floating point bit. Returns `None` if the friction would never
/// bring the velocity below the threshold within `MAX_GLIDE_TICKS`.
pub fn ticks_to_rest(initial_velocity: f64, config: &ScrollConfig) -> Option<u32> {
    if !(config.friction > 0.0 && config.friction < 1.0) {
        return None;
    }
    let mut velocity = saturate(initial_velocity, config.max_velocity);
    if !is_moving(velocity, config) {
        return Some(0);
    }
    for ticks in 1..=MAX_GLIDE_TICKS {
        match decay(velocity, config) {
            Decay::Stop => return Some(ticks),
            Decay::Continue(next) => velocity = next,
        }
    }
    None
}

/// Closed-form tick count: the smallest `k` with `|v0| * friction^k < threshold`
///
/// Always within one tick of `ceil(ln(threshold / |v0|) / ln(friction))`.
/// Saturates at `u32::MAX` for glides that never end.
pub fn tick_bound(initial_velocity: f64, config: &ScrollConfig) -> u32 {
    let speed = saturate(initial_velocity, config.max_velocity).abs();
    if speed < config.stop_threshold {
        return 0;
    }
    let exponent = (config.stop_threshold / speed).ln() / config.friction.ln();
    if exponent.is_nan() || exponent < 0.0 {
        return u32::MAX;
    }
    (exponent.floor() as u32).saturating_add(1)
}

/// Total unclamped distance covered before the glide stops
///
/// Each tick moves by the velocity it starts with, then decays.
pub fn glide_distance(initial_velocity: f64, config: &ScrollConfig) -> f64 {
    let mut velocity = saturate(initial_velocity, config.max_velocity);
    if !is_moving(velocity, config) || !(config.friction > 0.0 && config.friction < 1.0) {
        return 0.0;
    }
    let mut distance = 0.0;
    for _ in 0..MAX_GLIDE_TICKS {
        distance += velocity;
        match decay(velocity, config) {
            Decay::Stop => break,
            Decay::Continue(next) => velocity = next,
        }
    }
    distance
}
