//! Project aggregate - a named set of environment variables
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: All fields are encapsulated
//! - **Newtypes**: `ProjectName` and `EnvironmentMap` are valid by construction
//! - **Immutable name**: there is no rename; the name is the lookup key
//! - **Builder pattern**: `with_*` setters for rehydrating from storage

use chrono::{DateTime, Utc};

use crate::ids::ProjectId;
use crate::value_objects::{EnvironmentMap, ProjectName};

/// A stored project.
///
/// # Invariants
///
/// - `name` never changes after construction
/// - `updated_at >= created_at` as long as callers pass a monotonic clock
///
/// # Example
///
/// ```
/// use chrono::Utc;
/// use envhub_domain::{EnvironmentMap, Project, ProjectName};
///
/// let name = ProjectName::new("demo").unwrap();
/// let project = Project::new(name, EnvironmentMap::new(), Utc::now());
///
/// assert_eq!(project.name().as_str(), "demo");
/// assert!(project.environment().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    id: ProjectId,
    name: ProjectName,
    environment: EnvironmentMap,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Project {
    /// Create a new project; both timestamps are set to `now`.
    pub fn new(name: ProjectName, environment: EnvironmentMap, now: DateTime<Utc>) -> Self {
        Self {
            id: ProjectId::new(),
            name,
            environment,
            created_at: now,
            updated_at: now,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> ProjectId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &ProjectName {
        &self.name
    }

    #[inline]
    pub fn environment(&self) -> &EnvironmentMap {
        &self.environment
    }

    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[inline]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    // =========================================================================
    // Builder Methods (used when loading from storage)
    // =========================================================================

    pub fn with_id(mut self, id: ProjectId) -> Self {
        self.id = id;
        self
    }

    pub fn with_updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = updated_at;
        self
    }

    /// Consume the project, returning its environment.
    pub fn into_environment(self) -> EnvironmentMap {
        self.environment
    }
}
