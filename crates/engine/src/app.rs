//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::ports::{ClockPort, ProjectRepo};
use crate::use_cases;
use crate::use_cases::projects::{ExportEnvFile, ProjectCrud};

/// Main application state.
///
/// Holds the repository ports and use cases.
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub repositories: Repositories,
    pub use_cases: UseCases,
}

/// Container for repository ports.
pub struct Repositories {
    pub project: Arc<dyn ProjectRepo>,
}

/// Container for all use cases.
pub struct UseCases {
    pub projects: use_cases::ProjectUseCases,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(project_repo: Arc<dyn ProjectRepo>, clock: Arc<dyn ClockPort>) -> Self {
        let projects = use_cases::ProjectUseCases::new(
            ProjectCrud::new(project_repo.clone(), clock),
            ExportEnvFile::new(project_repo.clone()),
        );

        Self {
            repositories: Repositories {
                project: project_repo,
            },
            use_cases: UseCases { projects },
        }
    }
}
