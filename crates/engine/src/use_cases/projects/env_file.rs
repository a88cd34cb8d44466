//! `.env` file export.

use std::sync::Arc;

use envhub_domain::{env_file, ProjectName};

use crate::infrastructure::ports::ProjectRepo;

use super::ProjectError;

/// A project rendered as a downloadable `.env` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvFileExport {
    /// Suggested download name, `{project}.env`.
    pub file_name: String,
    pub contents: Vec<u8>,
}

/// Export a project's variables as `.env` text.
pub struct ExportEnvFile {
    repo: Arc<dyn ProjectRepo>,
}

impl ExportEnvFile {
    pub fn new(repo: Arc<dyn ProjectRepo>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, name: &ProjectName) -> Result<EnvFileExport, ProjectError> {
        let project = self
            .repo
            .find_by_name(name)
            .await?
            .ok_or_else(|| ProjectError::NotFound(name.to_string()))?;

        let contents = env_file::encode(project.environment());
        tracing::debug!(project = %name, bytes = contents.len(), "Exported .env file");

        Ok(EnvFileExport {
            file_name: name.env_file_name(),
            contents,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{MockProjectRepo, RepoError};
    use chrono::{TimeZone, Utc};
    use envhub_domain::{EnvironmentMap, Project};

    fn project(pairs: &[(&str, &str)]) -> Project {
        let mut map = EnvironmentMap::new();
        for (k, v) in pairs {
            map.insert(*k, *v).expect("valid key");
        }
        Project::new(
            ProjectName::new("demo").expect("valid name"),
            map,
            Utc.timestamp_opt(1_700_000_000, 0)
                .single()
                .expect("valid timestamp"),
        )
    }

    #[tokio::test]
    async fn renders_key_value_lines_and_file_name() {
        let stored = project(&[("C", "3"), ("A", "1"), ("B", "9")]);
        let mut repo = MockProjectRepo::new();
        repo.expect_find_by_name()
            .returning(move |_| Ok(Some(stored.clone())));

        let export = ExportEnvFile::new(Arc::new(repo))
            .execute(&ProjectName::new("demo").expect("valid name"))
            .await
            .expect("export");

        assert_eq!(export.file_name, "demo.env");
        assert_eq!(export.contents, b"A=1\nB=9\nC=3");
    }

    #[tokio::test]
    async fn empty_project_exports_empty_file() {
        let stored = project(&[]);
        let mut repo = MockProjectRepo::new();
        repo.expect_find_by_name()
            .returning(move |_| Ok(Some(stored.clone())));

        let export = ExportEnvFile::new(Arc::new(repo))
            .execute(&ProjectName::new("demo").expect("valid name"))
            .await
            .expect("export");

        assert!(export.contents.is_empty());
    }

    #[tokio::test]
    async fn missing_project_is_not_found() {
        let mut repo = MockProjectRepo::new();
        repo.expect_find_by_name().returning(|_| Ok(None));

        let err = ExportEnvFile::new(Arc::new(repo))
            .execute(&ProjectName::new("ghost").expect("valid name"))
            .await
            .unwrap_err();

        assert!(matches!(err, ProjectError::NotFound(ref n) if n == "ghost"));
    }

    #[tokio::test]
    async fn store_failure_propagates() {
        let mut repo = MockProjectRepo::new();
        repo.expect_find_by_name()
            .returning(|_| Err(RepoError::database("find_by_name", "locked")));

        let err = ExportEnvFile::new(Arc::new(repo))
            .execute(&ProjectName::new("demo").expect("valid name"))
            .await
            .unwrap_err();

        assert!(matches!(err, ProjectError::Repo(_)));
    }
}
