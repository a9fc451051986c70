//! Immutable per-platform scale presets.
//!
//! # Platform conventions
//!
//! - Desktop: modular scale. `h1`..`h6` use `ratio^5`..`ratio^0`; body sizes
//!   `p`, `small`, `caption` divide the base by `ratio^0`, `ratio^1`, `ratio^2`.
//!   Headings lead at 1.15, body at 1.6, line heights rounded to whole pixels.
//! - iOS: Human Interface Guidelines text styles, fixed multiples of the base
//!   size, 1.3 leading with two-decimal line heights.
//! - Android: Material Design 3 type roles, fixed multiples of the base size,
//!   1.5 leading with two-decimal line heights.

use typescale_model::{Platform, Role};

/// How a step's size is derived from the base size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Factor {
    /// Constant multiple of the base size, independent of the scale ratio.
    Fixed(f64),
    /// Scale ratio raised to an integer power. Negative powers divide.
    Power(i32),
}

impl Factor {
    /// Multiplier relative to the base size.
    pub fn multiplier(&self, scale_ratio: f64) -> f64 {
        match *self {
            Factor::Fixed(ratio) => ratio,
            Factor::Power(exponent) if exponent >= 0 => scale_ratio.powi(exponent),
            Factor::Power(exponent) => 1.0 / scale_ratio.powi(-exponent),
        }
    }

    /// Unrounded size in pixels.
    pub fn apply(&self, base_size: f64, scale_ratio: f64) -> f64 {
        match *self {
            Factor::Fixed(ratio) => base_size * ratio,
            Factor::Power(exponent) if exponent >= 0 => base_size * scale_ratio.powi(exponent),
            Factor::Power(exponent) => base_size / scale_ratio.powi(-exponent),
        }
    }
}

/// Precision used when rounding line heights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineHeightPrecision {
    Whole,
    Hundredths,
}

impl LineHeightPrecision {
    pub fn decimals(&self) -> i32 {
        match self {
            LineHeightPrecision::Whole => 0,
            LineHeightPrecision::Hundredths => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresetStep {
    pub element: &'static str,
    pub factor: Factor,
}

/// Ordered step definitions for one platform.
///
/// Steps before `heading_cutoff` are headings; the rest are body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalePreset {
    pub platform: Platform,
    pub steps: &'static [PresetStep],
    pub heading_cutoff: usize,
    pub heading_leading: f64,
    pub body_leading: f64,
    pub precision: LineHeightPrecision,
}

impl ScalePreset {
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn role_at(&self, index: usize) -> Role {
        if index < self.heading_cutoff {
            Role::Heading
        } else {
            Role::Body
        }
    }

    pub fn leading(&self, role: Role) -> f64 {
        match role {
            Role::Heading => self.heading_leading,
            Role::Body => self.body_leading,
        }
    }

    pub fn element_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.steps.iter().map(|step| step.element)
    }

    /// Per-step multipliers for a given scale ratio, in preset order.
    pub fn ratios(&self, scale_ratio: f64) -> Vec<f64> {
        self.steps
            .iter()
            .map(|step| step.factor.multiplier(scale_ratio))
            .collect()
    }
}

const fn step(element: &'static str, factor: Factor) -> PresetStep {
    PresetStep { element, factor }
}

static DESKTOP_STEPS: [PresetStep; 9] = [
    step("h1", Factor::Power(5)),
    step("h2", Factor::Power(4)),
    step("h3", Factor::Power(3)),
    step("h4", Factor::Power(2)),
    step("h5", Factor::Power(1)),
    step("h6", Factor::Power(0)),
    step("p", Factor::Power(0)),
    step("small", Factor::Power(-1)),
    step("caption", Factor::Power(-2)),
];

// Ratios are relative to a 16px base; comments give the HIG point size.
static IOS_STEPS: [PresetStep; 10] = [
    step("largeTitle", Factor::Fixed(3.125)), // 34pt
    step("title1", Factor::Fixed(2.875)),     // 28pt
    step("title2", Factor::Fixed(2.375)),     // 22pt
    step("title3", Factor::Fixed(1.875)),     // 20pt
    step("headline", Factor::Fixed(1.5)),     // 17pt
    step("body", Factor::Fixed(1.375)),       // 16pt
    step("callout", Factor::Fixed(1.25)),     // 15pt
    step("subhead", Factor::Fixed(1.125)),    // 14pt
    step("footnote", Factor::Fixed(1.0)),     // 13pt
    step("caption", Factor::Fixed(0.875)),    // 12pt
];

static ANDROID_STEPS: [PresetStep; 12] = [
    step("displayLarge", Factor::Fixed(3.5625)),
    step("displayMedium", Factor::Fixed(2.75)),
    step("displaySmall", Factor::Fixed(2.25)),
    step("headlineLarge", Factor::Fixed(2.0)),
    step("headlineMedium", Factor::Fixed(1.75)),
    step("headlineSmall", Factor::Fixed(1.5)),
    step("titleLarge", Factor::Fixed(1.375)),
    step("titleMedium", Factor::Fixed(1.25)),
    step("titleSmall", Factor::Fixed(1.125)),
    step("bodyLarge", Factor::Fixed(1.0)),
    step("bodyMedium", Factor::Fixed(0.875)),
    step("bodySmall", Factor::Fixed(0.75)),
];

static DESKTOP: ScalePreset = ScalePreset {
    platform: Platform::Desktop,
    steps: &DESKTOP_STEPS,
    heading_cutoff: 6,
    heading_leading: 1.15,
    body_leading: 1.6,
    precision: LineHeightPrecision::Whole,
};

static IOS: ScalePreset = ScalePreset {
    platform: Platform::Ios,
    steps: &IOS_STEPS,
    heading_cutoff: 4,
    heading_leading: 1.3,
    body_leading: 1.3,
    precision: LineHeightPrecision::Hundredths,
};

static ANDROID: ScalePreset = ScalePreset {
    platform: Platform::Android,
    steps: &ANDROID_STEPS,
    heading_cutoff: 6,
    heading_leading: 1.5,
    body_leading: 1.5,
    precision: LineHeightPrecision::Hundredths,
};

/// Preset for a platform.
pub fn preset(platform: Platform) -> &'static ScalePreset {
    match platform {
        Platform::Desktop => &DESKTOP,
        Platform::Ios => &IOS,
        Platform::Android => &ANDROID,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_well_formed() {
        for platform in Platform::ALL {
            let preset = preset(platform);
            assert_eq!(preset.platform, platform);
            assert!(preset.heading_cutoff <= preset.len());
            assert!(preset.heading_leading > 0.0 && preset.body_leading > 0.0);
            for step in preset.steps {
                if let Factor::Fixed(ratio) = step.factor {
                    assert!(ratio > 0.0, "{} has non-positive ratio", step.element);
                }
            }
        }
    }

    #[test]
    fn fixed_presets_are_descending() {
        for platform in [Platform::Ios, Platform::Android] {
            let ratios = preset(platform).ratios(1.2);
            for pair in ratios.windows(2) {
                assert!(pair[0] > pair[1], "{platform}: {} <= {}", pair[0], pair[1]);
            }
        }
    }

    #[test]
    fn desktop_ratios_follow_exponents() {
        let ratios = preset(Platform::Desktop).ratios(2.0);
        assert_eq!(ratios, vec![32.0, 16.0, 8.0, 4.0, 2.0, 1.0, 1.0, 0.5, 0.25]);
    }
}
