//! Canonical modular scale ratios.
//!
//! The eight presets are the musical intervals commonly used for type scales.
//! The engine accepts any positive ratio; these exist for selection lists and
//! for naming a ratio on the command line.

use serde::Serialize;

use crate::error::{Result, TypeScaleError};

/// A named scale ratio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RatioPreset {
    /// Kebab-case identifier accepted on the command line.
    pub slug: &'static str,
    /// Display label including the value, e.g. `Minor Third (1.2)`.
    pub label: &'static str,
    pub value: f64,
}

pub const PROGRESSIVE_SCALES: [RatioPreset; 8] = [
    RatioPreset {
        slug: "minor-second",
        label: "Minor Second (1.067)",
        value: 1.067,
    },
    RatioPreset {
        slug: "major-second",
        label: "Major Second (1.125)",
        value: 1.125,
    },
    RatioPreset {
        slug: "minor-third",
        label: "Minor Third (1.2)",
        value: 1.2,
    },
    RatioPreset {
        slug: "major-third",
        label: "Major Third (1.25)",
        value: 1.25,
    },
    RatioPreset {
        slug: "perfect-fourth",
        label: "Perfect Fourth (1.333)",
        value: 1.333,
    },
    RatioPreset {
        slug: "augmented-fourth",
        label: "Augmented Fourth (1.414)",
        value: 1.414,
    },
    RatioPreset {
        slug: "perfect-fifth",
        label: "Perfect Fifth (1.5)",
        value: 1.5,
    },
    RatioPreset {
        slug: "golden-ratio",
        label: "Golden Ratio (1.618)",
        value: 1.618,
    },
];

/// Minor Third, the default ratio for new settings.
pub const DEFAULT_RATIO: f64 = PROGRESSIVE_SCALES[2].value;

impl RatioPreset {
    /// Find a preset by slug (case-insensitive; spaces and underscores are
    /// treated as dashes).
    pub fn find(slug: &str) -> Option<&'static RatioPreset> {
        let normalized = slug.trim().to_lowercase().replace([' ', '_'], "-");
        PROGRESSIVE_SCALES
            .iter()
            .find(|preset| preset.slug == normalized)
    }

    /// Find the preset whose value equals `value`.
    pub fn from_value(value: f64) -> Option<&'static RatioPreset> {
        PROGRESSIVE_SCALES
            .iter()
            .find(|preset| (preset.value - value).abs() < 1e-9)
    }
}

/// Parse a ratio given either as a preset slug or as a number.
///
/// Numbers must be finite and strictly positive.
pub fn parse_ratio(text: &str) -> Result<f64> {
    if let Some(preset) = RatioPreset::find(text) {
        return Ok(preset.value);
    }
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Ok(value),
        _ => Err(TypeScaleError::InvalidRatio(text.to_string())),
    }
}
