// Utility functions for featured-service

use std::f64::consts::LN_2;

/// Clamp a value into [0, 1]. NaN passes through unchanged.
pub fn clamp01(value: f64) -> f64 {
    if value < 0.0 {
        0.0
    } else if value > 1.0 {
        1.0
    } else {
        value
    }
}

/// Half-life decay: 1.0 at age zero, 0.5 after one half-life.
pub fn half_life_decay(age_days: f64, half_life_days: f64) -> f64 {
    (-LN_2 * age_days / half_life_days).exp()
}
