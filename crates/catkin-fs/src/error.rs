//! Error types for the metadata store.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for metadata store operations.
pub type Result<T> = std::result::Result<T, FsError>;

/// Errors that can occur in metadata store operations.
#[derive(Debug, Error)]
pub enum FsError {
    /// Path to initialize does not exist.
    #[error("can't initialize workspace in '{0}' because it does not exist")]
    PathNotFound(PathBuf),

    /// No metadata directory at or above the path.
    #[error("workspace not found at '{0}'")]
    WorkspaceNotFound(PathBuf),

    /// Path is already inside another workspace.
    #[error(
        "can't initialize workspace in '{path}' because it is already contained in another workspace: '{enclosing}'"
    )]
    NestedWorkspace { path: PathBuf, enclosing: PathBuf },

    /// Verb document is valid YAML but not a mapping.
    #[error("metadata document '{path}' must be a mapping, found {kind}")]
    NotAMapping { path: PathBuf, kind: &'static str },

    /// Verb document could not be parsed or rendered.
    #[error("yaml error in '{path}': {source}")]
    Yaml {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// IO error on a workspace path.
    #[error("io error on '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Core library error.
    #[error("core error: {0}")]
    Core(#[from] catkin_core::CoreError),
}

impl FsError {
    /// Attach the path being accessed to an IO error.
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Attach the document path to a core document error.
    pub(crate) fn document(path: PathBuf, err: catkin_core::CoreError) -> Self {
        use catkin_core::CoreError;

        match err {
            CoreError::Yaml(source) => Self::Yaml { path, source },
            CoreError::NotAMapping(kind) => Self::NotAMapping { path, kind },
            other @ CoreError::InvalidVerb(_) => Self::Core(other),
        }
    }
}
