//! CLI library components for the type scale generator.

pub mod config;
pub mod logging;
pub mod render;
