//! Data model for the type scale engine.

pub mod attributes;
pub mod enums;
pub mod error;
pub mod ratios;
pub mod settings;
pub mod step;

pub use attributes::{AttributeOverrides, FontAttributes};
pub use enums::{Platform, Role, Unit};
pub use error::{Result, TypeScaleError};
pub use ratios::{DEFAULT_RATIO, PROGRESSIVE_SCALES, RatioPreset, parse_ratio};
pub use settings::{DEFAULT_BASE_SIZE, FALLBACK_PREVIEW_TEXT, TypographySettings};
pub use step::TypeStep;
