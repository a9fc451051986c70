//! Settings file loading and command-line overrides.
//!
//! Settings are read from a TOML file when one is given, otherwise defaults
//! are used. Command-line flags are applied on top. The merged settings are
//! validated here, before the engine is called, because the engine accepts
//! any number.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;
use typescale_model::{Platform, TypographySettings, Unit};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings file {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("base size must be a positive number of pixels, got {0}")]
    InvalidBaseSize(f64),

    #[error("scale ratio must be a positive number, got {0}")]
    InvalidScaleRatio(f64),
}

/// Load settings from `path`, or defaults when no path is given.
///
/// A missing file is an error: the caller asked for that file explicitly.
pub fn load_settings(path: Option<&Path>) -> Result<TypographySettings, ConfigError> {
    let Some(path) = path else {
        info!("no settings file given, using defaults");
        return Ok(TypographySettings::default());
    };
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let settings = parse_settings(&content).map_err(|source| ConfigError::Toml {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), platform = %settings.platform, "loaded settings");
    Ok(settings)
}

/// Parse settings from TOML text. Missing fields take their defaults.
pub fn parse_settings(content: &str) -> Result<TypographySettings, toml::de::Error> {
    toml::from_str(content)
}

/// Serialize settings as TOML.
pub fn settings_to_toml(settings: &TypographySettings) -> Result<String, ConfigError> {
    Ok(toml::to_string_pretty(settings)?)
}

/// Values supplied on the command line. `None` keeps the loaded value.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub platform: Option<Platform>,
    pub base_size: Option<f64>,
    pub scale_ratio: Option<f64>,
    pub unit: Option<Unit>,
    pub preview_text: Option<String>,
    pub truncate_text: Option<bool>,
    pub max_lines: Option<u32>,
}

impl SettingsOverrides {
    pub fn apply(self, settings: &mut TypographySettings) {
        if let Some(platform) = self.platform {
            settings.set_platform(platform);
        }
        if let Some(base_size) = self.base_size {
            settings.set_base_size(base_size);
        }
        if let Some(scale_ratio) = self.scale_ratio {
            settings.set_scale_ratio(scale_ratio);
        }
        if let Some(unit) = self.unit {
            settings.set_unit(unit);
        }
        if let Some(text) = self.preview_text {
            settings.set_preview_text(text);
        }
        if let Some(truncate) = self.truncate_text {
            settings.set_truncate_text(truncate);
        }
        if let Some(lines) = self.max_lines {
            settings.set_max_lines(lines);
        }
    }
}

/// Reject engine inputs that would produce a degenerate scale.
pub fn validate_engine_inputs(settings: &TypographySettings) -> Result<(), ConfigError> {
    if !(settings.base_size.is_finite() && settings.base_size > 0.0) {
        return Err(ConfigError::InvalidBaseSize(settings.base_size));
    }
    if !(settings.scale_ratio.is_finite() && settings.scale_ratio > 0.0) {
        return Err(ConfigError::InvalidScaleRatio(settings.scale_ratio));
    }
    Ok(())
}
