//! Output record of the scale engine.

use serde::{Deserialize, Serialize};

use crate::enums::Role;

/// One entry in a generated type scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeStep {
    /// Typographic role name, e.g. `h1`, `largeTitle`, `bodyLarge`.
    pub element: String,
    /// Which attribute group (heading or body) a consumer applies.
    pub role: Role,
    /// Font size in pixels, rounded to an integer.
    pub size_px: f64,
    /// Line height in pixels. Precision depends on the platform.
    pub line_height_px: f64,
    /// Multiplier relative to the base size, before rounding.
    pub scale_factor: f64,
}

impl TypeStep {
    pub fn is_heading(&self) -> bool {
        self.role.is_heading()
    }
}
