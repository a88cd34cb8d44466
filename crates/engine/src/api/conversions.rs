//! Domain -> wire conversions.

use envhub_domain::Project;
use envhub_shared::{ProjectRecord, ProjectResponse};

pub(crate) fn project_response(project: Project) -> ProjectResponse {
    ProjectResponse {
        project_name: project.name().to_string(),
        environment_map: project.into_environment().into_inner(),
    }
}

pub(crate) fn project_record(project: Project) -> ProjectRecord {
    ProjectRecord {
        id: project.id().to_uuid(),
        project_name: project.name().to_string(),
        created_at: project.created_at().to_rfc3339(),
        updated_at: project.updated_at().to_rfc3339(),
        environment_map: project.into_environment().into_inner(),
    }
}
