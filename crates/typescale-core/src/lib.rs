//! Type scale generation engine.
//!
//! [`generate`] turns a platform, base size and ratio into an ordered list of
//! [`TypeStep`]s. [`format`] renders a pixel size in a display unit. Both are
//! pure: no shared state, no I/O, safe to call from any thread.

#![deny(unsafe_code)]

pub mod engine;
pub mod presets;
pub mod rounding;
pub mod units;

pub use engine::{generate, generate_for, step_count};
pub use presets::{Factor, LineHeightPrecision, PresetStep, ScalePreset, preset};
pub use units::{PT_PER_PX, ROOT_FONT_SIZE, convert, format};

pub use typescale_model::{Platform, Role, TypeStep, Unit};
