//! Error types for loading scene files

use thiserror::Error;

/// Errors that can occur when loading or resolving a scene
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("Failed to read scene file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse scene TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid column_count '{value}': expected a positive integer or \"auto\"")]
    InvalidColumnCount { value: String },

    #[error("Invalid {axis} '{value}' for child {child}: expected a non-negative integer, \"fit\" or \"fill\"")]
    InvalidDimension {
        child: usize,
        axis: &'static str,
        value: String,
    },
}

impl SceneError {
    /// Create an invalid column count error
    pub fn column_count(value: impl Into<String>) -> Self {
        Self::InvalidColumnCount {
            value: value.into(),
        }
    }

    /// Create an invalid dimension error
    pub fn dimension(child: usize, axis: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidDimension {
            child,
            axis,
            value: value.into(),
        }
    }
}
