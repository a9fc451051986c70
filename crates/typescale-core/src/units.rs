//! Display formatting of pixel sizes.
//!
//! Pixels are the canonical value. Rem and pt strings are derived from the
//! pixel value on every call and never fed back into another conversion.

use typescale_model::Unit;

use crate::rounding::{round_half_up, round_to};

/// Root font size assumed for rem conversion.
pub const ROOT_FONT_SIZE: f64 = 16.0;

/// Points per CSS pixel (72pt per inch / 96px per inch).
pub const PT_PER_PX: f64 = 0.75;

/// Numeric value of `size_px` in `unit`. Rem is unrounded; pt is rounded to
/// a whole point.
pub fn convert(size_px: f64, unit: Unit) -> f64 {
    match unit {
        Unit::Px => size_px,
        Unit::Rem => size_px / ROOT_FONT_SIZE,
        Unit::Pt => round_half_up(size_px * PT_PER_PX),
    }
}

/// Format a pixel size for display.
///
/// - `PX`: whole pixels, `"16px"`
/// - `REM`: three decimals, `"1.000rem"`
/// - `PT`: whole points, `"12pt"`
pub fn format(size_px: f64, unit: Unit) -> String {
    match unit {
        // Adding 0.0 turns -0.0 into 0.0 so it never prints as "-0".
        Unit::Px => format!("{}px", round_half_up(size_px) + 0.0),
        Unit::Rem => {
            // Fixed-point rounding works on the magnitude; ties move away from zero.
            let rem = convert(size_px, unit);
            format!("{:.3}rem", round_to(rem.abs(), 3).copysign(rem) + 0.0)
        }
        Unit::Pt => format!("{}pt", convert(size_px, unit) + 0.0),
    }
}
