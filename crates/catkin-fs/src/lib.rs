//! Filesystem store for catkin_tools workspace metadata.
//!
//! A workspace is any directory with a `.catkin_tools/` directory directly
//! under it. That directory holds:
//! - `README`: Describes the directory to anyone browsing the workspace
//! - `<verb>.yml`: One metadata document per verb

pub mod error;
pub mod layout;
pub mod metadata;
pub mod workspace;

pub use catkin_core::{Metadata, Verb};
pub use error::{FsError, Result};
pub use metadata::{
    find_enclosing_workspace, get_metadata, get_paths, init_metadata_dir, is_workspace,
    list_verbs, update_metadata,
};
pub use workspace::Workspace;
