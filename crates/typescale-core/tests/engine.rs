//! Scenario tests for scale generation.

use typescale_core::{format, generate, generate_for, preset};
use typescale_model::{Platform, Role, TypeStep, TypographySettings, Unit};

fn find<'a>(steps: &'a [TypeStep], element: &str) -> &'a TypeStep {
    steps
        .iter()
        .find(|step| step.element == element)
        .unwrap_or_else(|| panic!("missing step {element}"))
}

fn elements(steps: &[TypeStep]) -> Vec<&str> {
    steps.iter().map(|step| step.element.as_str()).collect()
}

#[test]
fn desktop_scenario_16px_minor_third() {
    let steps = generate(Platform::Desktop, 16.0, 1.2);

    assert_eq!(
        elements(&steps),
        vec!["h1", "h2", "h3", "h4", "h5", "h6", "p", "small", "caption"]
    );
    assert_eq!(find(&steps, "h1").size_px, 40.0);
    assert_eq!(find(&steps, "h6").size_px, 16.0);
    assert_eq!(find(&steps, "p").size_px, 16.0);
    assert_eq!(find(&steps, "small").size_px, 13.0);
    assert_eq!(find(&steps, "caption").size_px, 11.0);

    assert_eq!(find(&steps, "h6").line_height_px, 18.0);
    assert_eq!(find(&steps, "small").line_height_px, 21.0);
    assert_eq!(find(&steps, "caption").line_height_px, 18.0);
}

#[test]
fn ios_scenario_16px() {
    let steps = generate(Platform::Ios, 16.0, 1.2);

    assert_eq!(
        elements(&steps),
        vec![
            "largeTitle",
            "title1",
            "title2",
            "title3",
            "headline",
            "body",
            "callout",
            "subhead",
            "footnote",
            "caption"
        ]
    );
    let large_title = &steps[0];
    assert_eq!(large_title.size_px, 50.0);
    assert_eq!(large_title.line_height_px, 65.0);
    assert_eq!(large_title.role, Role::Heading);

    let callout = find(&steps, "callout");
    assert_eq!(callout.size_px, 20.0);
    assert_eq!(callout.line_height_px, 26.0);

    let caption = find(&steps, "caption");
    assert_eq!(caption.size_px, 14.0);
    assert_eq!(caption.line_height_px, 18.2);
}

#[test]
fn android_scenario_16px() {
    let steps = generate(Platform::Android, 16.0, 1.2);

    assert_eq!(steps.len(), 12);
    let display_large = find(&steps, "displayLarge");
    assert_eq!(display_large.size_px, 57.0);
    assert_eq!(display_large.line_height_px, 85.5);

    let body_small = find(&steps, "bodySmall");
    assert_eq!(body_small.size_px, 12.0);
    assert_eq!(body_small.line_height_px, 18.0);
    assert_eq!(body_small.role, Role::Body);

    assert_eq!(find(&steps, "headlineSmall").role, Role::Heading);
    assert_eq!(find(&steps, "titleLarge").role, Role::Body);
}

#[test]
fn fixed_presets_ignore_scale_ratio() {
    for platform in [Platform::Ios, Platform::Android] {
        assert_eq!(
            generate(platform, 18.0, 1.067),
            generate(platform, 18.0, 1.618),
            "{platform} depends on ratio"
        );
    }
}

#[test]
fn desktop_headings_invert_below_unity_and_flatten_at_unity() {
    let shrinking = generate(Platform::Desktop, 16.0, 0.5);
    let heading_sizes: Vec<f64> = shrinking[..6].iter().map(|step| step.size_px).collect();
    assert_eq!(heading_sizes, vec![1.0, 1.0, 2.0, 4.0, 8.0, 16.0]);

    let flat = generate(Platform::Desktop, 16.0, 1.0);
    assert!(flat[..6].iter().all(|step| step.size_px == 16.0));
}

fn sizes(steps: &[TypeStep]) -> Vec<f64> {
    steps.iter().map(|step| step.size_px).collect()
}

#[test]
fn zero_ratio_is_degenerate_not_fatal() {
    let steps = generate(Platform::Desktop, 16.0, 0.0);

    assert_eq!(steps.len(), 9);
    assert!(steps[..5].iter().all(|step| step.size_px == 0.0 && step.line_height_px == 0.0));
    assert_eq!(find(&steps, "h6").size_px, 16.0);
    assert_eq!(find(&steps, "h6").line_height_px, 18.0);
    assert_eq!(find(&steps, "p").size_px, 16.0);
    assert_eq!(find(&steps, "p").line_height_px, 26.0);
    for element in ["small", "caption"] {
        let step = find(&steps, element);
        assert_eq!(step.size_px, f64::INFINITY, "{element}");
        assert_eq!(step.line_height_px, f64::INFINITY, "{element}");
    }
}

#[test]
fn negative_ratio_alternates_signs() {
    let steps = generate(Platform::Desktop, 16.0, -1.2);

    assert_eq!(steps.len(), 9);
    assert_eq!(
        sizes(&steps),
        vec![-40.0, 33.0, -28.0, 23.0, -19.0, 16.0, 16.0, -13.0, 11.0]
    );
    assert_eq!(find(&steps, "h1").line_height_px, -46.0);
    assert_eq!(find(&steps, "h2").line_height_px, 38.0);
    assert_eq!(find(&steps, "h3").line_height_px, -32.0);
}

#[test]
fn negative_base_negates_sizes() {
    let positive = generate(Platform::Desktop, 16.0, 1.2);
    let negative = generate(Platform::Desktop, -16.0, 1.2);

    assert_eq!(negative.len(), 9);
    let negated: Vec<f64> = positive.iter().map(|step| -step.size_px).collect();
    assert_eq!(sizes(&negative), negated);
    assert_eq!(elements(&negative), elements(&positive));
}

#[test]
fn fractional_base_is_rounded_at_the_anchor() {
    let steps = generate(Platform::Desktop, 15.5, 1.25);
    assert_eq!(find(&steps, "p").size_px, 16.0);
    assert_eq!(find(&steps, "h6").size_px, 16.0);
    assert_eq!(find(&steps, "p").scale_factor, 1.0);
}

#[test]
fn heading_cutoffs_match_presets() {
    for platform in Platform::ALL {
        let steps = generate(platform, 16.0, 1.2);
        let cutoff = preset(platform).heading_cutoff;
        let headings = steps.iter().filter(|step| step.is_heading()).count();
        assert_eq!(headings, cutoff, "{platform}");
        assert!(steps[..cutoff].iter().all(|step| step.role == Role::Heading));
        assert!(steps[cutoff..].iter().all(|step| step.role == Role::Body));
    }
}

#[test]
fn generate_for_reads_engine_inputs_from_settings() {
    let settings = TypographySettings::default()
        .with_platform(Platform::Desktop)
        .with_base_size(18.0)
        .with_scale_ratio(1.333);
    assert_eq!(generate_for(&settings), generate(Platform::Desktop, 18.0, 1.333));
}

#[test]
fn formatting_never_mutates_steps() {
    let steps = generate(Platform::Desktop, 16.0, 1.2);
    let before = steps.clone();
    let labels: Vec<String> = steps
        .iter()
        .map(|step| format(step.size_px, Unit::Rem))
        .collect();
    assert_eq!(labels[0], "2.500rem");
    assert_eq!(steps, before);
}
