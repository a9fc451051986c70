//! Scale generation.

use tracing::debug;
use typescale_model::{Platform, Role, TypeStep, TypographySettings};

use crate::presets::{ScalePreset, preset};
use crate::rounding::{round_half_up, round_to};

/// Generate the type scale for a platform.
///
/// Output order is the preset order and the length depends only on the
/// platform. `base_size` and `scale_ratio` are not validated: non-positive
/// inputs produce degenerate sizes rather than an error, so callers should
/// check them at their boundary. `scale_ratio` only affects desktop.
pub fn generate(platform: Platform, base_size: f64, scale_ratio: f64) -> Vec<TypeStep> {
    let preset = preset(platform);
    let steps: Vec<TypeStep> = preset
        .steps
        .iter()
        .enumerate()
        .map(|(index, step)| {
            let role = preset.role_at(index);
            let size_px = round_half_up(step.factor.apply(base_size, scale_ratio));
            TypeStep {
                element: step.element.to_string(),
                role,
                size_px,
                line_height_px: line_height(preset, role, size_px),
                scale_factor: step.factor.multiplier(scale_ratio),
            }
        })
        .collect();
    debug!(
        platform = %platform,
        base_size,
        scale_ratio,
        step_count = steps.len(),
        "generated type scale"
    );
    steps
}

/// Generate the scale for the engine inputs held in `settings`.
pub fn generate_for(settings: &TypographySettings) -> Vec<TypeStep> {
    generate(settings.platform, settings.base_size, settings.scale_ratio)
}

/// Number of steps [`generate`] returns for a platform.
pub fn step_count(platform: Platform) -> usize {
    preset(platform).len()
}

fn line_height(preset: &ScalePreset, role: Role, size_px: f64) -> f64 {
    round_to(size_px * preset.leading(role), preset.precision.decimals())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sizes(steps: &[TypeStep]) -> Vec<f64> {
        steps.iter().map(|step| step.size_px).collect()
    }

    #[test]
    fn desktop_minor_third_at_16px() {
        let steps = generate(Platform::Desktop, 16.0, 1.2);
        assert_eq!(
            sizes(&steps),
            vec![40.0, 33.0, 28.0, 23.0, 19.0, 16.0, 16.0, 13.0, 11.0]
        );
        let h1 = &steps[0];
        assert_eq!(h1.element, "h1");
        assert_eq!(h1.line_height_px, 46.0);
        assert!((h1.scale_factor - 2.48832).abs() < 1e-12);
        assert_eq!(steps[6].line_height_px, 26.0);
    }

    #[test]
    fn step_count_matches_generate() {
        for platform in Platform::ALL {
            assert_eq!(generate(platform, 16.0, 1.25).len(), step_count(platform));
        }
    }

    #[test]
    fn zero_base_size_is_degenerate_not_fatal() {
        let steps = generate(Platform::Android, 0.0, 1.2);
        assert!(steps.iter().all(|step| step.size_px == 0.0));
        assert!(steps.iter().all(|step| step.line_height_px == 0.0));
    }
}
