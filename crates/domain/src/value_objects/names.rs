//! Validated name newtypes for domain entities
//!
//! A project name doubles as its lookup key and as a URL path segment, so it
//! is stored exactly as given. Instead of trimming, names with surrounding
//! whitespace are rejected.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Maximum length for project names
const MAX_NAME_LENGTH: usize = 200;

// ============================================================================
// ProjectName
// ============================================================================

/// A validated project name (non-empty, <=200 chars, no surrounding whitespace, no `/`,
/// no control characters)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProjectName(String);

impl ProjectName {
    /// Create a new validated project name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The name is empty or only whitespace
    /// - The name has leading or trailing whitespace
    /// - The name exceeds 200 characters
    /// - The name contains a `/` or a control character
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("Project name cannot be empty"));
        }
        if name.trim() != name {
            return Err(DomainError::validation(
                "Project name cannot start or end with whitespace",
            ));
        }
        if name.chars().count() > MAX_NAME_LENGTH {
            return Err(DomainError::validation(format!(
                "Project name cannot exceed {} characters",
                MAX_NAME_LENGTH
            )));
        }
        if name.contains('/') {
            return Err(DomainError::validation("Project name cannot contain '/'"));
        }
        if name.chars().any(char::is_control) {
            return Err(DomainError::validation(
                "Project name cannot contain control characters",
            ));
        }
        Ok(Self(name))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Suggested file name for a `.env` download of this project.
    pub fn env_file_name(&self) -> String {
        format!("{}.env", self.0)
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ProjectName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl TryFrom<&str> for ProjectName {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<ProjectName> for String {
    fn from(name: ProjectName) -> String {
        name.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_names() {
        let name = ProjectName::new("billing-api").expect("valid");
        assert_eq!(name.as_str(), "billing-api");
        assert_eq!(name.to_string(), "billing-api");
        assert_eq!(name.env_file_name(), "billing-api.env");
    }

    #[test]
    fn rejects_empty_and_blank() {
        assert!(ProjectName::new("").is_err());
        assert!(ProjectName::new("   ").is_err());
    }

    #[test]
    fn rejects_surrounding_whitespace() {
        let err = ProjectName::new(" demo").unwrap_err();
        assert!(err.to_string().contains("whitespace"));
        assert!(ProjectName::new("demo\n").is_err());
    }

    #[test]
    fn rejects_slash_and_control_characters() {
        assert!(ProjectName::new("a/b").is_err());
        assert!(ProjectName::new("a\u{7}b").is_err());
    }

    #[test]
    fn keeps_non_ascii() {
        let name = ProjectName::new("café-prod").expect("valid");
        assert_eq!(name.as_str(), "café-prod");
    }

    #[test]
    fn enforces_length_limit() {
        assert!(ProjectName::new("x".repeat(MAX_NAME_LENGTH)).is_ok());
        assert!(ProjectName::new("x".repeat(MAX_NAME_LENGTH + 1)).is_err());
    }

    #[test]
    fn deserialization_validates() {
        let ok: Result<ProjectName, _> = serde_json::from_str("\"demo\"");
        assert!(ok.is_ok());
        let bad: Result<ProjectName, _> = serde_json::from_str("\"\"");
        assert!(bad.is_err());
    }
}
