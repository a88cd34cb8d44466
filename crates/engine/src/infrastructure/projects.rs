//! SQLite-backed project storage.

use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use envhub_domain::{EnvironmentMap, Project, ProjectId, ProjectName};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::infrastructure::ports::{ProjectRepo, ProjectSummary, RepoError};

const ENTITY: &str = "Project";

const PROJECT_COLUMNS: &str = "id, project_name, environment_json, created_at, updated_at";

/// SQLite implementation of project storage.
///
/// `project_name` carries a UNIQUE constraint, so duplicate creates are
/// rejected by the database itself.
pub struct SqliteProjectRepo {
    pool: SqlitePool,
}

impl SqliteProjectRepo {
    /// Connect to `database_url` and make sure the schema exists.
    pub async fn connect(database_url: &str) -> Result<Self, RepoError> {
        let pool = SqlitePool::connect(database_url)
            .await
            .map_err(|e| RepoError::database("connect", e))?;
        Self::from_pool(pool).await
    }

    pub async fn from_pool(pool: SqlitePool) -> Result<Self, RepoError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS projects (
                id TEXT PRIMARY KEY,
                project_name TEXT NOT NULL UNIQUE,
                environment_json TEXT NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&pool)
        .await
        .map_err(|e| RepoError::database("create_schema", e))?;

        Ok(Self { pool })
    }

    /// Close every pooled connection. Used on shutdown.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

fn encode_environment(environment: &EnvironmentMap) -> Result<String, RepoError> {
    serde_json::to_string(environment).map_err(RepoError::serialization)
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, RepoError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepoError::serialization(format!("bad timestamp {:?}: {}", raw, e)))
}

fn column<T>(row: &SqliteRow, name: &str) -> Result<T, RepoError>
where
    T: for<'r> sqlx::Decode<'r, sqlx::Sqlite> + sqlx::Type<sqlx::Sqlite>,
{
    row.try_get(name)
        .map_err(|e| RepoError::serialization(format!("column {}: {}", name, e)))
}

fn row_to_project(row: &SqliteRow) -> Result<Project, RepoError> {
    let id: String = column(row, "id")?;
    let name: String = column(row, "project_name")?;
    let environment_json: String = column(row, "environment_json")?;
    let created_at: String = column(row, "created_at")?;
    let updated_at: String = column(row, "updated_at")?;

    let id = ProjectId::from_str(&id).map_err(RepoError::serialization)?;
    let name = ProjectName::new(name).map_err(RepoError::serialization)?;
    let environment: EnvironmentMap =
        serde_json::from_str(&environment_json).map_err(RepoError::serialization)?;

    Ok(Project::new(name, environment, parse_timestamp(&created_at)?)
        .with_id(id)
        .with_updated_at(parse_timestamp(&updated_at)?))
}

#[async_trait]
impl ProjectRepo for SqliteProjectRepo {
    async fn find_all(&self) -> Result<Vec<ProjectSummary>, RepoError> {
        let rows = sqlx::query("SELECT project_name FROM projects ORDER BY project_name")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepoError::database("find_all", e))?;

        rows.iter()
            .map(|row| {
                let name: String = column(row, "project_name")?;
                let name = ProjectName::new(name).map_err(RepoError::serialization)?;
                Ok(ProjectSummary { name })
            })
            .collect()
    }

    async fn find_by_name(&self, name: &ProjectName) -> Result<Option<Project>, RepoError> {
        let sql = format!(
            "SELECT {} FROM projects WHERE project_name = ?",
            PROJECT_COLUMNS
        );
        let row = sqlx::query(&sql)
            .bind(name.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepoError::database("find_by_name", e))?;

        row.as_ref().map(row_to_project).transpose()
    }

    async fn create(&self, project: &Project) -> Result<(), RepoError> {
        let environment_json = encode_environment(project.environment())?;

        sqlx::query(
            r#"
            INSERT INTO projects (id, project_name, environment_json, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(project.id().to_string())
        .bind(project.name().as_str())
        .bind(environment_json)
        .bind(project.created_at().to_rfc3339())
        .bind(project.updated_at().to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                RepoError::already_exists(ENTITY, project.name())
            }
            other => RepoError::database("create", other),
        })?;

        Ok(())
    }

    async fn update(
        &self,
        name: &ProjectName,
        partial: &EnvironmentMap,
        updated_at: DateTime<Utc>,
    ) -> Result<Project, RepoError> {
        let patch_json = encode_environment(partial)?;

        // json_patch merges in the same statement as the write.
        let sql = format!(
            r#"
            UPDATE projects
            SET environment_json = json_patch(environment_json, ?), updated_at = ?
            WHERE project_name = ?
            RETURNING {}
            "#,
            PROJECT_COLUMNS
        );
        let row = sqlx::query(&sql)
            .bind(patch_json)
            .bind(updated_at.to_rfc3339())
            .bind(name.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepoError::database("update", e))?
            .ok_or_else(|| RepoError::not_found(ENTITY, name))?;

        row_to_project(&row)
    }

    async fn delete(&self, name: &ProjectName) -> Result<Project, RepoError> {
        let sql = format!(
            "DELETE FROM projects WHERE project_name = ? RETURNING {}",
            PROJECT_COLUMNS
        );
        let row = sqlx::query(&sql)
            .bind(name.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepoError::database("delete", e))?
            .ok_or_else(|| RepoError::not_found(ENTITY, name))?;

        row_to_project(&row)
    }
}
