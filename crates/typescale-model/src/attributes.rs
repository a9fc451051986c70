//! Font attribute sets applied per role.
//!
//! Body text carries a complete [`FontAttributes`] baseline. Headings carry
//! [`AttributeOverrides`], where every field is optional and `None` means the
//! heading uses the body value.

use serde::{Deserialize, Serialize};

/// A fully resolved set of font attributes. Values are CSS strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontAttributes {
    pub family: String,
    pub weight: String,
    /// Unitless line-height multiplier applied by renderers.
    pub line_height: String,
    pub letter_spacing: String,
    pub color: String,
    pub background_color: String,
    pub text_transform: String,
    pub font_style: String,
    pub text_decoration: String,
    pub text_align: String,
    /// iOS rendering hint (`-webkit-font-smoothing`).
    pub font_smoothing: String,
    /// iOS rendering hint (`-webkit-text-size-adjust`).
    pub text_size_adjust: String,
    /// Android rendering hint (`font-feature-settings`).
    pub font_feature_settings: String,
}

impl Default for FontAttributes {
    fn default() -> Self {
        Self {
            family: "Inter".to_string(),
            weight: "400".to_string(),
            line_height: "1.6".to_string(),
            letter_spacing: "0em".to_string(),
            color: "#222222".to_string(),
            background_color: "#FFFFFF".to_string(),
            text_transform: "none".to_string(),
            font_style: "normal".to_string(),
            text_decoration: "none".to_string(),
            text_align: "left".to_string(),
            font_smoothing: "auto".to_string(),
            text_size_adjust: "100%".to_string(),
            font_feature_settings: "normal".to_string(),
        }
    }
}

/// Per-field overrides layered on top of a [`FontAttributes`] baseline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttributeOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_transform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_decoration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_smoothing: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_size_adjust: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_feature_settings: Option<String>,
}

impl AttributeOverrides {
    /// Default heading overrides: bold, tighter leading and tracking.
    /// Family, colors and platform hints follow the body.
    pub fn heading_defaults() -> Self {
        Self {
            weight: Some("700".to_string()),
            line_height: Some("1.15".to_string()),
            letter_spacing: Some("-0.022em".to_string()),
            text_transform: Some("none".to_string()),
            font_style: Some("normal".to_string()),
            text_decoration: Some("none".to_string()),
            text_align: Some("left".to_string()),
            ..Self::default()
        }
    }

    /// Returns true when no field is overridden.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merge these overrides onto `base`, field by field.
    pub fn resolve_onto(&self, base: &FontAttributes) -> FontAttributes {
        fn pick(value: &Option<String>, fallback: &str) -> String {
            value.as_deref().unwrap_or(fallback).to_string()
        }

        FontAttributes {
            family: pick(&self.family, &base.family),
            weight: pick(&self.weight, &base.weight),
            line_height: pick(&self.line_height, &base.line_height),
            letter_spacing: pick(&self.letter_spacing, &base.letter_spacing),
            color: pick(&self.color, &base.color),
            background_color: pick(&self.background_color, &base.background_color),
            text_transform: pick(&self.text_transform, &base.text_transform),
            font_style: pick(&self.font_style, &base.font_style),
            text_decoration: pick(&self.text_decoration, &base.text_decoration),
            text_align: pick(&self.text_align, &base.text_align),
            font_smoothing: pick(&self.font_smoothing, &base.font_smoothing),
            text_size_adjust: pick(&self.text_size_adjust, &base.text_size_adjust),
            font_feature_settings: pick(&self.font_feature_settings, &base.font_feature_settings),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_overrides_resolve_to_base() {
        let base = FontAttributes::default();
        assert!(AttributeOverrides::default().is_empty());
        assert_eq!(AttributeOverrides::default().resolve_onto(&base), base);
    }

    #[test]
    fn heading_defaults_inherit_family_and_color() {
        let base = FontAttributes {
            family: "Lora".to_string(),
            color: "#111111".to_string(),
            ..FontAttributes::default()
        };
        let resolved = AttributeOverrides::heading_defaults().resolve_onto(&base);
        assert_eq!(resolved.family, "Lora");
        assert_eq!(resolved.color, "#111111");
        assert_eq!(resolved.weight, "700");
        assert_eq!(resolved.line_height, "1.15");
        assert_eq!(resolved.letter_spacing, "-0.022em");
        assert_eq!(resolved.font_smoothing, "auto");
    }
}
