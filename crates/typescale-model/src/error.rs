//! Error type for parsing platforms, units and ratios.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeScaleError {
    #[error("unknown platform: {0} (expected desktop, ios or android)")]
    UnknownPlatform(String),
    #[error("unknown unit: {0} (expected PX, REM or PT)")]
    UnknownUnit(String),
    #[error("invalid scale ratio: {0} (expected a preset name or a positive number)")]
    InvalidRatio(String),
}

pub type Result<T> = std::result::Result<T, TypeScaleError>;
