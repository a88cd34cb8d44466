//! Repository port traits for database access.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use envhub_domain::{EnvironmentMap, Project, ProjectName};

use super::error::RepoError;

/// What `find_all` returns for each project: the name only, no variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSummary {
    pub name: ProjectName,
}

// =============================================================================
// Project Storage
// =============================================================================

/// Storage for projects, keyed by unique project name.
///
/// Implementations own uniqueness: `create` must fail with
/// `RepoError::AlreadyExists` even when two creates for the same name race.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectRepo: Send + Sync {
    /// Every stored project, names only. Order is unspecified.
    async fn find_all(&self) -> Result<Vec<ProjectSummary>, RepoError>;

    async fn find_by_name(&self, name: &ProjectName) -> Result<Option<Project>, RepoError>;

    /// Insert a new project. `RepoError::AlreadyExists` if the name is taken.
    async fn create(&self, project: &Project) -> Result<(), RepoError>;

    /// Merge `partial` into the stored environment of `name` and return the
    /// updated record. Keys in `partial` overwrite stored ones; other stored
    /// keys are kept. The read and the write are one atomic step, so
    /// concurrent updates of different keys never lose each other.
    /// `RepoError::NotFound` if there is no such project.
    async fn update(
        &self,
        name: &ProjectName,
        partial: &EnvironmentMap,
        updated_at: DateTime<Utc>,
    ) -> Result<Project, RepoError>;

    /// Remove `name`, returning the removed record.
    /// `RepoError::NotFound` if there is no such project.
    async fn delete(&self, name: &ProjectName) -> Result<Project, RepoError>;
}
