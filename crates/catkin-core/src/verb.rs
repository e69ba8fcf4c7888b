//! Verb names.

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of a catkin verb (e.g., "build", "config").
///
/// Each verb owns one metadata document, so the name must be usable as a
/// plain file name inside the metadata directory.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Verb(String);

impl Verb {
    /// Create a verb, validating the name.
    ///
    /// # Errors
    /// Returns `CoreError::InvalidVerb` if the name is empty, `.` or `..`,
    /// or contains a path separator or NUL.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if Self::is_valid(&name) {
            Ok(Self(name))
        } else {
            Err(CoreError::InvalidVerb(name))
        }
    }

    fn is_valid(name: &str) -> bool {
        !name.is_empty()
            && name != "."
            && name != ".."
            && !name.contains(['/', '\\', '\0'])
    }

    /// The verb name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name of this verb's document, given the document extension.
    #[must_use]
    pub fn file_name(&self, extension: &str) -> String {
        format!("{}.{extension}", self.0)
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Verb {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Verb {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Verb {
    type Error = CoreError;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl std::str::FromStr for Verb {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl From<Verb> for String {
    fn from(verb: Verb) -> Self {
        verb.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_verbs() {
        for name in ["build", "config", "clean", "build-profile", "v2.1"] {
            let verb = Verb::new(name).unwrap();
            assert_eq!(verb.as_str(), name);
        }
    }

    #[test]
    fn test_invalid_verbs() {
        for name in ["", ".", "..", "a/b", "..\\x", "nul\0"] {
            let result = Verb::new(name);
            assert!(
                matches!(result, Err(CoreError::InvalidVerb(ref n)) if n == name),
                "{name:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_file_name() {
        let verb: Verb = "build".parse().unwrap();
        assert_eq!(verb.file_name("yml"), "build.yml");
        assert_eq!(verb.to_string(), "build");
    }

    #[test]
    fn test_deserialize_validates() {
        let verb: Verb = serde_yaml::from_str("build").unwrap();
        assert_eq!(verb.as_str(), "build");

        let result: std::result::Result<Verb, _> = serde_yaml::from_str("'../build'");
        assert!(result.is_err());
    }
}
