//! Caller-owned typography settings.
//!
//! Holds everything a preview needs: engine inputs, attribute sets per role,
//! preview text and display unit. The engine never reads this directly; callers
//! pass the relevant fields in on every call.

use serde::{Deserialize, Serialize};

use crate::attributes::{AttributeOverrides, FontAttributes};
use crate::enums::{Platform, Role, Unit};
use crate::ratios::DEFAULT_RATIO;

/// Text shown when the preview text is blank.
pub const FALLBACK_PREVIEW_TEXT: &str = "The quick brown fox jumps over the lazy dog";

/// Default base font size in pixels.
pub const DEFAULT_BASE_SIZE: f64 = 16.0;

/// Typography settings (persisted by callers as TOML when they choose to).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypographySettings {
    pub platform: Platform,
    pub base_size: f64,
    pub scale_ratio: f64,
    pub unit: Unit,
    pub preview_text: String,
    pub truncate_text: bool,
    /// Line limit applied while `truncate_text` is on.
    pub max_lines: u32,
    pub body: FontAttributes,
    pub heading: AttributeOverrides,
}

impl Default for TypographySettings {
    fn default() -> Self {
        Self {
            platform: Platform::Desktop,
            base_size: DEFAULT_BASE_SIZE,
            scale_ratio: DEFAULT_RATIO,
            unit: Unit::Px,
            preview_text: String::new(),
            truncate_text: true,
            max_lines: 1,
            body: FontAttributes::default(),
            heading: AttributeOverrides::heading_defaults(),
        }
    }
}

impl TypographySettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    pub fn with_base_size(mut self, base_size: f64) -> Self {
        self.base_size = base_size;
        self
    }

    pub fn with_scale_ratio(mut self, scale_ratio: f64) -> Self {
        self.scale_ratio = scale_ratio;
        self
    }

    pub fn with_unit(mut self, unit: Unit) -> Self {
        self.unit = unit;
        self
    }

    pub fn set_platform(&mut self, platform: Platform) {
        self.platform = platform;
    }

    pub fn set_base_size(&mut self, base_size: f64) {
        self.base_size = base_size;
    }

    pub fn set_scale_ratio(&mut self, scale_ratio: f64) {
        self.scale_ratio = scale_ratio;
    }

    pub fn set_body(&mut self, body: FontAttributes) {
        self.body = body;
    }

    pub fn set_heading(&mut self, heading: AttributeOverrides) {
        self.heading = heading;
    }

    pub fn set_preview_text(&mut self, text: impl Into<String>) {
        self.preview_text = text.into();
    }

    /// Turning truncation on resets the limit to a single line.
    pub fn set_truncate_text(&mut self, truncate: bool) {
        self.truncate_text = truncate;
        if truncate {
            self.max_lines = 1;
        }
    }

    pub fn set_max_lines(&mut self, lines: u32) {
        self.max_lines = lines.max(1);
    }

    pub fn set_unit(&mut self, unit: Unit) {
        self.unit = unit;
    }

    /// Line clamp to apply to preview text, if any.
    pub fn line_clamp(&self) -> Option<u32> {
        self.truncate_text.then_some(self.max_lines.max(1))
    }

    /// Restore every field to its default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Resolved attribute set for a step role.
    pub fn attributes_for(&self, role: Role) -> FontAttributes {
        match role {
            Role::Body => self.body.clone(),
            Role::Heading => self.heading.resolve_onto(&self.body),
        }
    }

    /// Preview text, or the pangram fallback when blank.
    pub fn display_text(&self) -> &str {
        let trimmed = self.preview_text.trim();
        if trimmed.is_empty() {
            FALLBACK_PREVIEW_TEXT
        } else {
            trimmed
        }
    }
}
