//! CLI argument definitions for the type scale generator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use typescale_cli::render::ScaleOutput;
use typescale_model::{Platform, Unit};

#[derive(Parser)]
#[command(
    name = "typescale",
    version,
    about = "Typographic scale generator for desktop, iOS and Android",
    long_about = "Generate a typographic scale from a base size and ratio.\n\n\
                  Desktop uses a modular scale; iOS and Android follow the\n\
                  platform text style tables. Output as a table, JSON, CSS or\n\
                  design tokens."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate a type scale.
    Scale(ScaleArgs),

    /// List the named scale ratios.
    Ratios,

    /// List the platform presets.
    Platforms,

    /// Print the default settings as TOML.
    Defaults,
}

#[derive(Parser)]
pub struct ScaleArgs {
    /// Settings file (TOML). Flags below override its values.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Target platform.
    #[arg(long = "platform", value_enum)]
    pub platform: Option<PlatformArg>,

    /// Base font size in pixels.
    #[arg(long = "base-size", value_name = "PX")]
    pub base_size: Option<f64>,

    /// Scale ratio, as a number or a name such as `major-third`.
    ///
    /// Only the desktop platform uses the ratio.
    #[arg(long = "ratio", value_name = "RATIO")]
    pub ratio: Option<String>,

    /// Display unit for font sizes.
    #[arg(long = "unit", value_enum)]
    pub unit: Option<UnitArg>,

    /// Output format.
    #[arg(long = "output", value_enum, default_value = "table")]
    pub output: OutputArg,

    /// Preview text shown with the table output.
    #[arg(long = "text", value_name = "TEXT")]
    pub text: Option<String>,

    /// Clamp preview text to this many lines.
    #[arg(long = "max-lines", value_name = "N", conflicts_with = "no_truncate")]
    pub max_lines: Option<u32>,

    /// Do not clamp preview text.
    #[arg(long = "no-truncate")]
    pub no_truncate: bool,

    /// Ancestor selector prepended to CSS rules, e.g. `.preview`.
    #[arg(long = "scope", value_name = "SELECTOR")]
    pub scope: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum PlatformArg {
    Desktop,
    Ios,
    Android,
}

impl From<PlatformArg> for Platform {
    fn from(value: PlatformArg) -> Self {
        match value {
            PlatformArg::Desktop => Platform::Desktop,
            PlatformArg::Ios => Platform::Ios,
            PlatformArg::Android => Platform::Android,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum UnitArg {
    Px,
    Rem,
    Pt,
}

impl From<UnitArg> for Unit {
    fn from(value: UnitArg) -> Self {
        match value {
            UnitArg::Px => Unit::Px,
            UnitArg::Rem => Unit::Rem,
            UnitArg::Pt => Unit::Pt,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputArg {
    Table,
    Json,
    Css,
    Tokens,
}

impl From<OutputArg> for ScaleOutput {
    fn from(value: OutputArg) -> Self {
        match value {
            OutputArg::Table => ScaleOutput::Table,
            OutputArg::Json => ScaleOutput::Json,
            OutputArg::Css => ScaleOutput::Css,
            OutputArg::Tokens => ScaleOutput::Tokens,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
