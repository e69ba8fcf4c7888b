//! Workspace handle.

use crate::error::{FsError, Result};
use crate::metadata::{
    find_enclosing_workspace, get_metadata, get_paths, init_metadata_dir, is_workspace,
    list_verbs, update_metadata, verb_file_path,
};
use catkin_core::{Metadata, Verb};
use std::path::{Path, PathBuf};
use tracing::debug;

/// A workspace root with a metadata directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    /// Root path of the workspace.
    root: PathBuf,
}

impl Workspace {
    /// Initialize the metadata directory at the given path.
    ///
    /// Re-initializing an existing workspace is allowed and keeps its
    /// metadata unless `reset` is set.
    ///
    /// # Errors
    /// Returns error if the path doesn't exist, is nested in another
    /// workspace, or IO fails.
    pub fn init(path: impl AsRef<Path>, reset: bool) -> Result<Self> {
        let root = path.as_ref().to_path_buf();
        init_metadata_dir(&root, reset)?;
        Ok(Self { root })
    }

    /// Open the workspace rooted exactly at the given path.
    ///
    /// # Errors
    /// Returns `FsError::WorkspaceNotFound` if there is no metadata directory
    /// directly under `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let root = path.as_ref().to_path_buf();

        if !is_workspace(&root) {
            return Err(FsError::WorkspaceNotFound(root));
        }

        debug!(path = %root.display(), "Opened workspace");

        Ok(Self { root })
    }

    /// Open the innermost workspace containing `start`.
    ///
    /// # Errors
    /// Returns `FsError::WorkspaceNotFound` if neither `start` nor any of its
    /// ancestors is a workspace.
    pub fn discover(start: impl AsRef<Path>) -> Result<Self> {
        let start = start.as_ref();
        let root = find_enclosing_workspace(start)
            .ok_or_else(|| FsError::WorkspaceNotFound(start.to_path_buf()))?;

        debug!(start = %start.display(), root = %root.display(), "Discovered workspace");

        Ok(Self { root })
    }

    /// Get the workspace root path.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the metadata directory path.
    #[must_use]
    pub fn metadata_dir(&self) -> PathBuf {
        get_paths(&self.root, None).0
    }

    /// Get the path of a verb's metadata document.
    #[must_use]
    pub fn verb_path(&self, verb: &Verb) -> PathBuf {
        verb_file_path(&self.root, verb)
    }

    /// Read a verb's metadata, empty if it has none yet.
    ///
    /// # Errors
    /// Returns error if the document is malformed or IO fails.
    pub fn get(&self, verb: &Verb) -> Result<Metadata> {
        get_metadata(&self.root, verb)
    }

    /// Merge top-level keys into a verb's metadata.
    ///
    /// # Errors
    /// Returns error if the existing document is malformed or IO fails.
    pub fn update(&self, verb: &Verb, data: Metadata) -> Result<Metadata> {
        update_metadata(&self.root, verb, data)
    }

    /// List verbs with stored metadata.
    ///
    /// # Errors
    /// Returns error if the metadata directory can't be read.
    pub fn verbs(&self) -> Result<Vec<Verb>> {
        list_verbs(&self.root)
    }

    /// Delete all stored metadata, leaving an empty metadata directory.
    ///
    /// # Errors
    /// Returns error if IO fails; the metadata directory may then be gone.
    pub fn reset(&self) -> Result<()> {
        init_metadata_dir(&self.root, true)
    }
}
