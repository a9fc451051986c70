//! Text output for CLI commands.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use typescale_core::{format, preset};
use typescale_model::{PROGRESSIVE_SCALES, Platform, RatioPreset, Role, TypeStep, TypographySettings};
use typescale_report::{CssOptions, render_css, render_tokens_json};

/// Output format for a generated scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScaleOutput {
    #[default]
    Table,
    Json,
    Css,
    Tokens,
}

/// Render `steps` in the requested format.
pub fn render_scale(
    steps: &[TypeStep],
    settings: &TypographySettings,
    output: ScaleOutput,
    css_options: &CssOptions,
) -> serde_json::Result<String> {
    match output {
        ScaleOutput::Table => Ok(scale_report(steps, settings)),
        ScaleOutput::Json => serde_json::to_string_pretty(steps),
        ScaleOutput::Css => Ok(render_css(steps, settings, css_options)),
        ScaleOutput::Tokens => render_tokens_json(steps, settings),
    }
}

/// Heading lines followed by the step table.
pub fn scale_report(steps: &[TypeStep], settings: &TypographySettings) -> String {
    let ratio = match RatioPreset::from_value(settings.scale_ratio) {
        Some(preset) => preset.label.to_string(),
        None => settings.scale_ratio.to_string(),
    };
    let mut lines = vec![
        format!("Platform: {}", settings.platform.label()),
        format!("Base size: {}", format(settings.base_size, settings.unit)),
    ];
    if settings.platform == Platform::Desktop {
        lines.push(format!("Scale ratio: {ratio}"));
    }
    lines.push(format!("Preview: {}", settings.display_text()));
    lines.push(scale_table(steps, settings).to_string());
    lines.join("\n")
}

pub fn scale_table(steps: &[TypeStep], settings: &TypographySettings) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Element"),
        header_cell("Role"),
        header_cell("Size"),
        header_cell("Pixels"),
        header_cell("Line height"),
        header_cell("Factor"),
    ]);
    apply_table_style(&mut table);
    for index in 2..6 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for step in steps {
        table.add_row(vec![
            Cell::new(&step.element).add_attribute(Attribute::Bold),
            role_cell(step.role),
            Cell::new(format(step.size_px, settings.unit)),
            Cell::new(step.size_px),
            Cell::new(step.line_height_px),
            Cell::new(format!("{:.4}", step.scale_factor)),
        ]);
    }
    table
}

pub fn ratios_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Name"), header_cell("Ratio"), header_cell("Label")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for preset in &PROGRESSIVE_SCALES {
        table.add_row(vec![
            Cell::new(preset.slug),
            Cell::new(preset.value),
            Cell::new(preset.label),
        ]);
    }
    table
}

pub fn platforms_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Platform"),
        header_cell("Steps"),
        header_cell("Headings"),
        header_cell("Line height"),
        header_cell("Elements"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for platform in Platform::ALL {
        let preset = preset(platform);
        let leading = if preset.heading_leading == preset.body_leading {
            format!("x{}", preset.body_leading)
        } else {
            format!("x{} / x{}", preset.heading_leading, preset.body_leading)
        };
        let elements: Vec<&str> = preset.element_names().collect();
        table.add_row(vec![
            Cell::new(platform.as_str()),
            Cell::new(preset.len()),
            Cell::new(preset.heading_cutoff),
            Cell::new(leading),
            Cell::new(elements.join(", ")),
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn role_cell(role: Role) -> Cell {
    match role {
        Role::Heading => Cell::new(role.as_str()).fg(Color::Magenta),
        Role::Body => Cell::new(role.as_str()),
    }
}
