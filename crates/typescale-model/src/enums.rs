//! Type-safe enumerations for the type scale engine.
//!
//! Platform and unit tags arrive as strings from the command line and from
//! settings files. They are parsed into these enums at the boundary so the
//! engine only ever sees a closed set of values.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TypeScaleError;

/// Target platform whose typographic conventions drive scale generation.
///
/// - **Desktop**: modular scale, six headings plus three body sizes
/// - **Ios**: Apple Human Interface Guidelines text styles
/// - **Android**: Material Design 3 type scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Desktop,
    Ios,
    Android,
}

impl Platform {
    /// All platforms in display order.
    pub const ALL: [Platform; 3] = [Platform::Desktop, Platform::Ios, Platform::Android];

    /// Returns the lowercase tag used in settings files and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Desktop => "desktop",
            Platform::Ios => "ios",
            Platform::Android => "android",
        }
    }

    /// Returns a human-readable name.
    pub fn label(&self) -> &'static str {
        match self {
            Platform::Desktop => "Desktop",
            Platform::Ios => "iOS",
            Platform::Android => "Android",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Platform {
    type Err = TypeScaleError;

    /// Parse a platform tag (case-insensitive, surrounding whitespace ignored).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();

        match normalized.as_str() {
            "desktop" => Ok(Platform::Desktop),
            "ios" => Ok(Platform::Ios),
            "android" => Ok(Platform::Android),
            _ => Err(TypeScaleError::UnknownPlatform(s.to_string())),
        }
    }
}

/// Which font attribute group applies to a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Heading,
    Body,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Heading => "heading",
            Role::Body => "body",
        }
    }

    pub fn is_heading(&self) -> bool {
        matches!(self, Role::Heading)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Display unit for font sizes. Sizes are always held in pixels; the unit
/// only affects presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Unit {
    #[default]
    Px,
    Rem,
    Pt,
}

impl Unit {
    /// All units in selector order.
    pub const ALL: [Unit; 3] = [Unit::Px, Unit::Rem, Unit::Pt];

    /// Returns the uppercase tag ("PX", "REM", "PT").
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Px => "PX",
            Unit::Rem => "REM",
            Unit::Pt => "PT",
        }
    }

    /// Returns the CSS suffix appended to formatted values.
    pub fn suffix(&self) -> &'static str {
        match self {
            Unit::Px => "px",
            Unit::Rem => "rem",
            Unit::Pt => "pt",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Unit {
    type Err = TypeScaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();

        match normalized.as_str() {
            "PX" => Ok(Unit::Px),
            "REM" => Ok(Unit::Rem),
            "PT" => Ok(Unit::Pt),
            _ => Err(TypeScaleError::UnknownUnit(s.to_string())),
        }
    }
}
