//! Project CRUD operations.

use std::sync::Arc;

use envhub_domain::{EnvironmentMap, Project, ProjectName};

use crate::infrastructure::ports::{ClockPort, ProjectRepo};

use super::{EnvironmentSource, ProjectError};

pub struct ProjectCrud {
    repo: Arc<dyn ProjectRepo>,
    clock: Arc<dyn ClockPort>,
}

impl ProjectCrud {
    pub fn new(repo: Arc<dyn ProjectRepo>, clock: Arc<dyn ClockPort>) -> Self {
        Self { repo, clock }
    }

    /// Names of every stored project, sorted.
    pub async fn list_names(&self) -> Result<Vec<ProjectName>, ProjectError> {
        let mut names: Vec<ProjectName> = self
            .repo
            .find_all()
            .await?
            .into_iter()
            .map(|summary| summary.name)
            .collect();
        names.sort();
        Ok(names)
    }

    pub async fn get(&self, name: &ProjectName) -> Result<Project, ProjectError> {
        self.repo
            .find_by_name(name)
            .await?
            .ok_or_else(|| ProjectError::NotFound(name.to_string()))
    }

    /// Create a project. Uniqueness is checked by the store on insert, so two
    /// concurrent creates for one name cannot both succeed.
    pub async fn create(
        &self,
        name: ProjectName,
        source: EnvironmentSource,
    ) -> Result<Project, ProjectError> {
        let project = Project::new(name, source.into_environment(), self.clock.now());

        self.repo.create(&project).await?;

        tracing::info!(
            project = %project.name(),
            variables = project.environment().len(),
            "Created project"
        );
        Ok(project)
    }

    /// Merge `partial` into the stored environment. Keys in `partial` win;
    /// keys it does not mention are kept. The store merges and writes in one
    /// step.
    pub async fn update(
        &self,
        name: &ProjectName,
        partial: &EnvironmentMap,
    ) -> Result<Project, ProjectError> {
        let updated = self.repo.update(name, partial, self.clock.now()).await?;

        tracing::info!(
            project = %name,
            changed = partial.len(),
            variables = updated.environment().len(),
            "Updated project"
        );
        Ok(updated)
    }

    /// Remove a project, returning what was stored.
    pub async fn delete(&self, name: &ProjectName) -> Result<Project, ProjectError> {
        let deleted = self.repo.delete(name).await?;
        tracing::info!(project = %name, "Deleted project");
        Ok(deleted)
    }
}
