//! Error types for layout documents.

use orderly_core::AttributeError;
use thiserror::Error;

/// Error parsing or inflating a layout document.
#[derive(Debug, Error)]
pub enum InflateError {
    /// YAML parsing error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
    /// A child's layout attributes were rejected by its parent
    #[error("{path}: {source}")]
    Attribute {
        /// Node path
        path: String,
        /// Underlying attribute error
        source: AttributeError,
    },
    /// A key that is neither a node field nor a `layout_` attribute
    #[error("{path}: unknown key '{key}'")]
    UnknownKey {
        /// Node path
        path: String,
        /// Offending key
        key: String,
    },
    /// A value of the wrong shape
    #[error("{path}: invalid value for '{key}': {message}")]
    InvalidValue {
        /// Node path
        path: String,
        /// Offending key
        key: String,
        /// Error message
        message: String,
    },
    /// Children listed under a leaf
    #[error("{path}: a block cannot have children")]
    BlockWithChildren {
        /// Node path
        path: String,
    },
    /// A block without a content size
    #[error("{path}: a block needs a 'content' size")]
    MissingContent {
        /// Node path
        path: String,
    },
    /// Density that is zero, negative or not finite
    #[error("density must be a positive number, got {0}")]
    InvalidDensity(f32),
}
