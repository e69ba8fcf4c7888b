//! Metadata directory and verb document operations.
//!
//! These functions work on plain paths so callers can use them before a
//! workspace exists. [`crate::Workspace`] wraps them for an already-known root.

use crate::error::{FsError, Result};
use crate::layout::{METADATA_DIR_NAME, README_FILE_NAME, README_TEXT, VERB_FILE_EXTENSION};
use catkin_core::{Metadata, Verb, merge_shallow, parse_document, render_document};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Get the metadata directory of a workspace and, if a verb is given, the
/// path of that verb's document.
///
/// Only joins paths; nothing is read from disk.
#[must_use]
pub fn get_paths(workspace_path: &Path, verb: Option<&Verb>) -> (PathBuf, Option<PathBuf>) {
    let verb_file = verb.map(|v| verb_file_path(workspace_path, v));
    (metadata_dir_path(workspace_path), verb_file)
}

fn metadata_dir_path(workspace_path: &Path) -> PathBuf {
    workspace_path.join(METADATA_DIR_NAME)
}

pub(crate) fn verb_file_path(workspace_path: &Path, verb: &Verb) -> PathBuf {
    metadata_dir_path(workspace_path).join(verb.file_name(VERB_FILE_EXTENSION))
}

/// Check whether `path` is a workspace root.
#[must_use]
pub fn is_workspace(path: &Path) -> bool {
    metadata_dir_path(path).is_dir()
}

/// Find the innermost workspace containing `start`, including `start` itself.
///
/// The walk is lexical: `start` is not canonicalized and symlinks are not
/// resolved. A relative `start` only checks its own lexical ancestors and
/// then the current directory (reported as `.`); directories above the
/// current one are never checked. Canonicalize first to search the full
/// ancestry.
#[must_use]
pub fn find_enclosing_workspace(start: &Path) -> Option<PathBuf> {
    for candidate in start.ancestors() {
        if is_workspace(candidate) {
            let found = if candidate.as_os_str().is_empty() {
                Path::new(".")
            } else {
                candidate
            };
            return Some(found.to_path_buf());
        }
    }

    None
}

/// Create the metadata directory under `workspace_path`, or reset it.
///
/// An existing directory is left untouched unless `reset` is set, in which
/// case it is deleted and recreated empty. The README is rewritten either way.
///
/// # Errors
/// Returns `FsError::PathNotFound` if `workspace_path` doesn't exist,
/// `FsError::NestedWorkspace` if an ancestor is already a workspace, or an
/// IO error. A failed reset can leave the metadata directory deleted.
pub fn init_metadata_dir(workspace_path: &Path, reset: bool) -> Result<()> {
    if !workspace_path.exists() {
        return Err(FsError::PathNotFound(workspace_path.to_path_buf()));
    }

    if let Some(enclosing) = find_enclosing_workspace(workspace_path) {
        if enclosing != workspace_path {
            return Err(FsError::NestedWorkspace {
                path: workspace_path.to_path_buf(),
                enclosing,
            });
        }
    }

    let metadata_dir = metadata_dir_path(workspace_path);

    if metadata_dir.exists() {
        if reset {
            info!(path = %metadata_dir.display(), "Deleting existing workspace metadata");
            fs::remove_dir_all(&metadata_dir).map_err(|e| FsError::io(&metadata_dir, e))?;
            fs::create_dir(&metadata_dir).map_err(|e| FsError::io(&metadata_dir, e))?;
        }
    } else {
        fs::create_dir(&metadata_dir).map_err(|e| FsError::io(&metadata_dir, e))?;
        info!(path = %workspace_path.display(), "Initialized workspace metadata");
    }

    let readme = metadata_dir.join(README_FILE_NAME);
    fs::write(&readme, README_TEXT).map_err(|e| FsError::io(&readme, e))?;

    Ok(())
}

/// Read the metadata document for a verb.
///
/// A missing or empty document reads as an empty mapping; the metadata
/// directory itself need not exist.
///
/// # Errors
/// Returns `FsError::Yaml` or `FsError::NotAMapping` for a malformed
/// document, or an IO error.
pub fn get_metadata(workspace_path: &Path, verb: &Verb) -> Result<Metadata> {
    let path = verb_file_path(workspace_path, verb);

    if !path.exists() {
        return Ok(Metadata::new());
    }

    let content = fs::read_to_string(&path).map_err(|e| FsError::io(&path, e))?;
    let data = parse_document(&content).map_err(|e| FsError::document(path.clone(), e))?;

    debug!(verb = %verb, path = %path.display(), keys = data.len(), "Read verb metadata");

    Ok(data)
}

/// Merge `new_data` into a verb's metadata document and write it back.
///
/// Creates the metadata directory if needed. Top-level keys in `new_data`
/// replace existing ones; other keys are kept. Returns the merged document.
///
/// # Errors
/// Returns any error from [`init_metadata_dir`] or [`get_metadata`], or an
/// error writing the document.
pub fn update_metadata(workspace_path: &Path, verb: &Verb, new_data: Metadata) -> Result<Metadata> {
    init_metadata_dir(workspace_path, false)?;

    let mut data = get_metadata(workspace_path, verb)?;
    let changed = merge_shallow(&mut data, new_data);

    let path = verb_file_path(workspace_path, verb);
    let content = render_document(&data).map_err(|e| FsError::document(path.clone(), e))?;
    fs::write(&path, content).map_err(|e| FsError::io(&path, e))?;

    debug!(verb = %verb, path = %path.display(), ?changed, "Updated verb metadata");

    Ok(data)
}

/// List the verbs that have a metadata document, sorted by name.
///
/// # Errors
/// Returns an IO error if the metadata directory can't be read.
pub fn list_verbs(workspace_path: &Path) -> Result<Vec<Verb>> {
    let metadata_dir = metadata_dir_path(workspace_path);
    if !metadata_dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut verbs = Vec::new();

    let entries = fs::read_dir(&metadata_dir).map_err(|e| FsError::io(&metadata_dir, e))?;

    for entry in entries {
        let entry = entry.map_err(|e| FsError::io(&metadata_dir, e))?;
        let path = entry.path();
        if !entry
            .file_type()
            .map_err(|e| FsError::io(&path, e))?
            .is_file()
        {
            continue;
        }

        if path.extension().and_then(|e| e.to_str()) != Some(VERB_FILE_EXTENSION) {
            continue;
        }

        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            debug!(path = %path.display(), "Skipping non-UTF-8 document name");
            continue;
        };

        match Verb::new(stem) {
            Ok(verb) => verbs.push(verb),
            Err(e) => {
                debug!(path = %path.display(), error = %e, "Skipping document");
            }
        }
    }

    verbs.sort();

    Ok(verbs)
}
