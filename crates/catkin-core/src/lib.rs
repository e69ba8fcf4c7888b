//! catkin-core: Verb names and metadata document logic.
//!
//! This crate provides:
//! - `Verb`: A validated verb name, used as a metadata document namespace
//! - Document parsing and rendering for verb metadata
//! - Shallow merge of metadata updates

pub mod document;
pub mod error;
pub mod verb;

pub use document::{merge_shallow, parse_document, render_document, value_kind};
pub use error::{CoreError, Result};
pub use verb::Verb;

/// A verb metadata document: top-level keys mapped to arbitrary values.
pub type Metadata = serde_yaml::Mapping;
