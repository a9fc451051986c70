//! Tests for stylesheet generation.

use typescale_core::generate;
use typescale_model::{AttributeOverrides, Platform, TypographySettings, Unit};
use typescale_report::{CssOptions, render_css};

fn settings(platform: Platform) -> TypographySettings {
    TypographySettings::default().with_platform(platform)
}

#[test]
fn android_heading_and_body_rules_snapshot() {
    let mut settings = settings(Platform::Android);
    settings.set_truncate_text(false);
    let steps = generate(Platform::Android, 16.0, 1.2);

    let css = render_css(&steps[5..7], &settings, &CssOptions::default());

    insta::assert_snapshot!(css, @r#"
/* Type scale: android, base 16px, ratio 1.2 */

.headlineSmall {
  font-family: Inter;
  font-size: 24px;
  font-weight: 700;
  line-height: 1.15;
  letter-spacing: -0.022em;
  color: #222222;
  background-color: #FFFFFF;
  text-transform: none;
  font-style: normal;
  text-decoration: none;
  text-align: left;
  font-feature-settings: normal;
}

.titleLarge {
  font-family: Inter;
  font-size: 22px;
  font-weight: 400;
  line-height: 1.6;
  letter-spacing: 0em;
  color: #222222;
  background-color: #FFFFFF;
  text-transform: none;
  font-style: normal;
  text-decoration: none;
  text-align: left;
  font-feature-settings: normal;
}
"#);
}

#[test]
fn ios_rules_carry_webkit_hints() {
    let mut settings = settings(Platform::Ios);
    settings.body.font_smoothing = "antialiased".to_string();
    settings.set_heading(AttributeOverrides {
        text_size_adjust: Some("none".to_string()),
        ..AttributeOverrides::heading_defaults()
    });
    let steps = generate(Platform::Ios, 16.0, 1.2);

    let css = render_css(&steps, &settings, &CssOptions::default());

    assert!(css.contains(".largeTitle {"));
    assert!(css.contains(".body {"));
    assert_eq!(css.matches("-webkit-font-smoothing: antialiased;").count(), 10);
    assert_eq!(css.matches("-webkit-text-size-adjust: none;").count(), 4);
    assert_eq!(css.matches("-webkit-text-size-adjust: 100%;").count(), 6);
    assert!(!css.contains("font-feature-settings"));
}

#[test]
fn desktop_rules_use_tags_and_selected_unit() {
    let settings = settings(Platform::Desktop).with_unit(Unit::Rem);
    let steps = generate(Platform::Desktop, 16.0, 1.2);

    let css = render_css(&steps, &settings, &CssOptions::default().with_scope(".preview"));

    assert!(css.contains(".preview h1 {\n  font-family: Inter;\n  font-size: 2.500rem;"));
    assert!(css.contains(".preview .caption {"));
    assert!(!css.contains("-webkit-font-smoothing"));
    assert!(!css.contains("font-feature-settings"));
}

#[test]
fn line_clamp_block_follows_truncation() {
    let mut settings = settings(Platform::Desktop);
    settings.set_max_lines(3);
    let steps = generate(Platform::Desktop, 16.0, 1.2);
    let options = CssOptions {
        header_comment: false,
        ..CssOptions::default()
    };

    let css = render_css(&steps[..1], &settings, &options);
    assert!(css.starts_with("h1 {"));
    assert!(css.contains("  display: -webkit-box;\n  -webkit-line-clamp: 3;"));
    assert!(css.contains("  overflow: hidden;\n}"));

    settings.set_truncate_text(false);
    let css = render_css(&steps[..1], &settings, &options);
    assert!(!css.contains("line-clamp"));
}
