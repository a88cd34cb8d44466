//! Project use cases.
//!
//! Business rules on top of project storage: unique names, merge-on-update,
//! and conversion to and from `.env` files.

mod crud;
mod env_file;

use envhub_domain::EnvironmentMap;

use crate::infrastructure::ports::RepoError;

pub use crud::ProjectCrud;
pub use env_file::{EnvFileExport, ExportEnvFile};

/// Error type for project use cases.
#[derive(Debug, thiserror::Error)]
pub enum ProjectError {
    #[error("No project named '{0}' exists.")]
    NotFound(String),
    #[error("The project name you've provided already exists. Please try again.")]
    DuplicateProject(String),
    #[error("Repository error: {0}")]
    Repo(RepoError),
}

impl From<RepoError> for ProjectError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound { id, .. } => Self::NotFound(id),
            RepoError::AlreadyExists { id, .. } => Self::DuplicateProject(id),
            other => Self::Repo(other),
        }
    }
}

/// Where the variables of a new project come from.
#[derive(Debug, Clone)]
pub enum EnvironmentSource {
    /// Already-validated key/value pairs (from a JSON body).
    Map(EnvironmentMap),
    /// Raw `.env` file contents (from an upload).
    EnvFile(Vec<u8>),
}

impl EnvironmentSource {
    pub fn into_environment(self) -> EnvironmentMap {
        match self {
            Self::Map(map) => map,
            Self::EnvFile(bytes) => envhub_domain::env_file::decode(&bytes),
        }
    }
}

/// Container for project use cases.
pub struct ProjectUseCases {
    pub crud: ProjectCrud,
    pub export: ExportEnvFile,
}

impl ProjectUseCases {
    pub fn new(crud: ProjectCrud, export: ExportEnvFile) -> Self {
        Self { crud, export }
    }
}
