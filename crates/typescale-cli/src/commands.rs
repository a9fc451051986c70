use anyhow::{Context, Result};
use tracing::{debug, info, info_span, warn};

use typescale_cli::config::{
    SettingsOverrides, load_settings, settings_to_toml, validate_engine_inputs,
};
use typescale_cli::render::{platforms_table, ratios_table, render_scale};
use typescale_core::generate_for;
use typescale_model::{Platform, TypographySettings, parse_ratio};
use typescale_report::CssOptions;

use crate::cli::ScaleArgs;

pub fn run_scale(args: &ScaleArgs) -> Result<String> {
    let mut settings = load_settings(args.config.as_deref()).context("load settings")?;
    overrides_from_args(args)?.apply(&mut settings);
    validate_engine_inputs(&settings)?;

    let span = info_span!("scale", platform = %settings.platform);
    let _guard = span.enter();
    if settings.platform != Platform::Desktop && args.ratio.is_some() {
        warn!("scale ratio only affects the desktop platform");
    }

    let steps = generate_for(&settings);
    info!(
        steps = steps.len(),
        base_size = settings.base_size,
        scale_ratio = settings.scale_ratio,
        "generated scale"
    );

    let mut css_options = CssOptions::new();
    if let Some(scope) = &args.scope {
        css_options = css_options.with_scope(scope.clone());
    }
    render_scale(&steps, &settings, args.output.into(), &css_options).context("render scale")
}

pub fn run_ratios() -> Result<()> {
    println!("{}", ratios_table());
    Ok(())
}

pub fn run_platforms() -> Result<()> {
    println!("{}", platforms_table());
    Ok(())
}

pub fn run_defaults() -> Result<()> {
    let toml = settings_to_toml(&TypographySettings::default()).context("serialize defaults")?;
    print!("{toml}");
    Ok(())
}

fn overrides_from_args(args: &ScaleArgs) -> Result<SettingsOverrides> {
    let scale_ratio = match &args.ratio {
        Some(text) => {
            let ratio = parse_ratio(text).with_context(|| format!("invalid --ratio {text:?}"))?;
            debug!(input = %text, ratio, "parsed scale ratio");
            Some(ratio)
        }
        None => None,
    };
    let truncate_text = if args.no_truncate {
        Some(false)
    } else if args.max_lines.is_some() {
        Some(true)
    } else {
        None
    };
    Ok(SettingsOverrides {
        platform: args.platform.map(Into::into),
        base_size: args.base_size,
        scale_ratio,
        unit: args.unit.map(Into::into),
        preview_text: args.text.clone(),
        truncate_text,
        max_lines: args.max_lines,
    })
}
