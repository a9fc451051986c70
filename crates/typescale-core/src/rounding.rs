//! Rounding helpers shared by the engine and the unit formatter.
//!
//! Ties round toward positive infinity, so `2.5 -> 3` and `-2.5 -> -2`.
//! `f64::round` rounds ties away from zero and would disagree on negative
//! inputs.

/// Round to the nearest integer, ties toward positive infinity.
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Round to `decimals` places, ties toward positive infinity.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    round_half_up(value * scale) / scale
}
