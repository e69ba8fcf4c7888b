//! On-disk layout of the metadata directory.

/// Directory name marking a workspace root.
pub const METADATA_DIR_NAME: &str = ".catkin_tools";

/// README file name within the metadata directory.
pub const README_FILE_NAME: &str = "README";

/// Extension of verb metadata documents.
pub const VERB_FILE_EXTENSION: &str = "yml";

/// Contents written to the README on every initialization.
pub const README_TEXT: &str = "\
# Catkin Tools Metadata

This directory was generated by catkin_tools and it contains persistent
configuration information used by the `catkin` command and its sub-commands.

Please see the catkin_tools documentation before editing any files in this
directory.
";
