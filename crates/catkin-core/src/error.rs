//! Error types for catkin-core.

use thiserror::Error;

/// Result type alias for catkin-core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors that can occur in catkin-core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Verb name cannot be used as a document name.
    #[error("invalid verb name: '{0}'")]
    InvalidVerb(String),

    /// Document parsed to something other than a mapping.
    #[error("expected a mapping at the top level, found {0}")]
    NotAMapping(&'static str),

    /// YAML parsing/serialization error.
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
