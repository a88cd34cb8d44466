//! Environment map - the key/value payload of a project.
//!
//! Keys are kept sorted so that JSON output and `.env` downloads are
//! deterministic.

use std::collections::btree_map;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A string-to-string mapping of environment variables.
///
/// # Invariants
///
/// - Every key is non-empty
/// - No key contains `=` or whitespace, and none starts with `#`, so every
///   entry survives a `.env` encode and decode
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, String>", into = "BTreeMap<String, String>")]
pub struct EnvironmentMap(BTreeMap<String, String>);

impl EnvironmentMap {
    /// An empty map. A project with no variables is valid.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Check that `key` can be stored in an environment map.
    pub fn validate_key(key: &str) -> Result<(), DomainError> {
        if key.is_empty() {
            return Err(DomainError::validation(
                "Environment variable names cannot be empty",
            ));
        }
        if key.contains('=') {
            return Err(DomainError::validation(format!(
                "Environment variable name '{}' cannot contain '='",
                key
            )));
        }
        if key.chars().any(char::is_whitespace) {
            return Err(DomainError::validation(format!(
                "Environment variable name '{}' cannot contain whitespace",
                key.escape_debug()
            )));
        }
        if key.starts_with('#') {
            return Err(DomainError::validation(format!(
                "Environment variable name '{}' cannot start with '#'",
                key
            )));
        }
        Ok(())
    }

    /// Insert or overwrite a variable, returning the previous value.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Option<String>, DomainError> {
        let key = key.into();
        Self::validate_key(&key)?;
        Ok(self.0.insert(key, value.into()))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries in ascending key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
        self.0.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn into_inner(self) -> BTreeMap<String, String> {
        self.0
    }
}

impl TryFrom<BTreeMap<String, String>> for EnvironmentMap {
    type Error = DomainError;

    fn try_from(map: BTreeMap<String, String>) -> Result<Self, Self::Error> {
        for key in map.keys() {
            Self::validate_key(key)?;
        }
        Ok(Self(map))
    }
}

impl From<EnvironmentMap> for BTreeMap<String, String> {
    fn from(map: EnvironmentMap) -> Self {
        map.0
    }
}

impl<'a> IntoIterator for &'a EnvironmentMap {
    type Item = (&'a String, &'a String);
    type IntoIter = btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> EnvironmentMap {
        let mut map = EnvironmentMap::new();
        for (k, v) in pairs {
            map.insert(*k, *v).expect("valid key");
        }
        map
    }

    #[test]
    fn insert_rejects_bad_keys() {
        let mut map = EnvironmentMap::new();
        assert!(map.insert("", "x").is_err());
        assert!(map.insert("A=B", "x").is_err());
        assert!(map.insert("A\nB", "x").is_err());
        assert!(map.insert(" A", "x").is_err());
        assert!(map.insert("export X", "x").is_err());
        assert!(map.insert("#A", "x").is_err());
        assert!(map.is_empty());
    }

    #[test]
    fn values_are_unrestricted() {
        let map = env(&[("URL", "postgres://u:p@h/db?a=b"), ("EMPTY", "")]);
        assert_eq!(map.get("URL"), Some("postgres://u:p@h/db?a=b"));
        assert_eq!(map.get("EMPTY"), Some(""));
    }

    #[test]
    fn iterates_in_key_order() {
        let map = env(&[("Z", "1"), ("A", "2"), ("M", "3")]);
        let keys: Vec<_> = map.keys().collect();
        assert_eq!(keys, vec!["A", "M", "Z"]);
    }

    #[test]
    fn serializes_as_plain_object() {
        let map = env(&[("A", "1"), ("B", "2")]);
        let json = serde_json::to_string(&map).expect("serialize");
        assert_eq!(json, r#"{"A":"1","B":"2"}"#);

        let back: EnvironmentMap = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, map);
    }

    #[test]
    fn deserialization_validates_keys() {
        let bad: Result<EnvironmentMap, _> = serde_json::from_str(r#"{"":"x"}"#);
        assert!(bad.is_err());
    }
}
