//! CSS stylesheet generation.

use tracing::debug;
use typescale_core::format;
use typescale_model::{FontAttributes, Platform, TypeStep, TypographySettings};

/// Elements emitted as bare tag selectors. Everything else becomes a class.
const TAG_ELEMENTS: [&str; 8] = ["h1", "h2", "h3", "h4", "h5", "h6", "p", "small"];

/// Options for stylesheet generation.
#[derive(Debug, Clone)]
pub struct CssOptions {
    /// Ancestor selector prepended to every rule, e.g. `.preview`.
    pub scope: Option<String>,
    /// Emit a leading comment describing the scale inputs.
    pub header_comment: bool,
}

impl Default for CssOptions {
    fn default() -> Self {
        Self {
            scope: None,
            header_comment: true,
        }
    }
}

impl CssOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }
}

/// Selector for a step element (`h1` stays a tag, `largeTitle` becomes `.largeTitle`).
pub fn selector_for(element: &str, scope: Option<&str>) -> String {
    let base = if TAG_ELEMENTS.contains(&element) {
        element.to_string()
    } else {
        format!(".{element}")
    };
    match scope {
        Some(scope) if !scope.trim().is_empty() => format!("{} {base}", scope.trim()),
        _ => base,
    }
}

/// Render a stylesheet for `steps` using the attribute sets in `settings`.
///
/// Font sizes are printed in `settings.unit`. Line heights use the resolved
/// `line_height` attribute, matching what the live preview applies.
pub fn render_css(steps: &[TypeStep], settings: &TypographySettings, options: &CssOptions) -> String {
    let mut rules = Vec::with_capacity(steps.len() + 1);
    if options.header_comment {
        rules.push(format!(
            "/* Type scale: {}, base {}px, ratio {} */",
            settings.platform, settings.base_size, settings.scale_ratio
        ));
    }
    for step in steps {
        let attributes = settings.attributes_for(step.role);
        let selector = selector_for(&step.element, options.scope.as_deref());
        let declarations = declarations(step, &attributes, settings);
        let body: Vec<String> = declarations
            .iter()
            .map(|(property, value)| format!("  {property}: {value};"))
            .collect();
        rules.push(format!("{selector} {{\n{}\n}}", body.join("\n")));
    }
    debug!(platform = %settings.platform, rule_count = steps.len(), "rendered stylesheet");
    let mut css = rules.join("\n\n");
    css.push('\n');
    css
}

fn declarations(
    step: &TypeStep,
    attributes: &FontAttributes,
    settings: &TypographySettings,
) -> Vec<(&'static str, String)> {
    let mut declarations = vec![
        ("font-family", css_family(&attributes.family)),
        ("font-size", format(step.size_px, settings.unit)),
        ("font-weight", attributes.weight.clone()),
        ("line-height", attributes.line_height.clone()),
        ("letter-spacing", attributes.letter_spacing.clone()),
        ("color", attributes.color.clone()),
        ("background-color", attributes.background_color.clone()),
        ("text-transform", attributes.text_transform.clone()),
        ("font-style", attributes.font_style.clone()),
        ("text-decoration", attributes.text_decoration.clone()),
        ("text-align", attributes.text_align.clone()),
    ];
    match settings.platform {
        Platform::Ios => {
            declarations.push(("-webkit-font-smoothing", attributes.font_smoothing.clone()));
            declarations.push(("-webkit-text-size-adjust", attributes.text_size_adjust.clone()));
        }
        Platform::Android => {
            declarations.push(("font-feature-settings", attributes.font_feature_settings.clone()));
        }
        Platform::Desktop => {}
    }
    if let Some(lines) = settings.line_clamp() {
        declarations.push(("display", "-webkit-box".to_string()));
        declarations.push(("-webkit-line-clamp", lines.to_string()));
        declarations.push(("-webkit-box-orient", "vertical".to_string()));
        declarations.push(("overflow", "hidden".to_string()));
    }
    declarations
}

/// Quote single family names containing whitespace. Lists and already quoted
/// names pass through.
fn css_family(family: &str) -> String {
    let trimmed = family.trim();
    if trimmed.contains(',') || trimmed.starts_with('"') || trimmed.starts_with('\'') {
        trimmed.to_string()
    } else if trimmed.contains(char::is_whitespace) {
        format!("\"{trimmed}\"")
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selectors_use_tags_for_html_elements() {
        assert_eq!(selector_for("h1", None), "h1");
        assert_eq!(selector_for("small", None), "small");
        assert_eq!(selector_for("caption", None), ".caption");
        assert_eq!(selector_for("largeTitle", None), ".largeTitle");
        assert_eq!(selector_for("p", Some(".preview")), ".preview p");
        assert_eq!(selector_for("p", Some("  ")), "p");
    }

    #[test]
    fn family_quoting() {
        assert_eq!(css_family("Inter"), "Inter");
        assert_eq!(css_family("Playfair Display"), "\"Playfair Display\"");
        assert_eq!(css_family("'Fira Code', monospace"), "'Fira Code', monospace");
    }
}
