//! Design token export.

use serde::{Deserialize, Serialize};
use typescale_core::format;
use typescale_model::{Platform, Role, TypeStep, TypographySettings, Unit};

/// Token document for a whole scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenDocument {
    pub platform: Platform,
    pub base_size: f64,
    pub scale_ratio: f64,
    pub unit: Unit,
    pub steps: Vec<TokenStep>,
}

/// Token for one step. Pixel values are canonical; `display_size` is
/// formatted in the document unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenStep {
    pub element: String,
    pub role: Role,
    pub size_px: f64,
    pub line_height_px: f64,
    pub scale_factor: f64,
    pub display_size: String,
    pub font_family: String,
    pub font_weight: String,
    pub letter_spacing: String,
}

pub fn design_tokens(steps: &[TypeStep], settings: &TypographySettings) -> TokenDocument {
    let heading = settings.attributes_for(Role::Heading);
    let body = settings.attributes_for(Role::Body);
    let steps = steps
        .iter()
        .map(|step| {
            let attributes = match step.role {
                Role::Heading => &heading,
                Role::Body => &body,
            };
            TokenStep {
                element: step.element.clone(),
                role: step.role,
                size_px: step.size_px,
                line_height_px: step.line_height_px,
                scale_factor: step.scale_factor,
                display_size: format(step.size_px, settings.unit),
                font_family: attributes.family.clone(),
                font_weight: attributes.weight.clone(),
                letter_spacing: attributes.letter_spacing.clone(),
            }
        })
        .collect();
    TokenDocument {
        platform: settings.platform,
        base_size: settings.base_size,
        scale_ratio: settings.scale_ratio,
        unit: settings.unit,
        steps,
    }
}

/// Pretty-printed JSON for [`design_tokens`].
pub fn render_tokens_json(
    steps: &[TypeStep],
    settings: &TypographySettings,
) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&design_tokens(steps, settings))
}
