//! Export of generated type scales.
//!
//! - **CSS**: one rule per step with the resolved font attributes for its role,
//!   platform rendering hints and optional line clamping
//! - **Design tokens**: JSON document with pixel values and display sizes

mod css;
mod tokens;

pub use css::{CssOptions, render_css, selector_for};
pub use tokens::{TokenDocument, TokenStep, design_tokens, render_tokens_json};
