//! HTTP routes.

use axum::{
    extract::{
        multipart::{Multipart, MultipartRejection},
        rejection::JsonRejection,
        Path, State,
    },
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

use envhub_shared::{
    DeletedProjectResponse, EnvironmentRequest, ProjectNamesResponse, ProjectResponse,
    UpdatedProjectResponse, ValidationLocation,
};

use super::conversions::{project_record, project_response};
use super::error::ApiError;
use super::validation;
use crate::app::App;
use crate::use_cases::projects::EnvironmentSource;

/// Multipart field carrying an uploaded `.env` file.
pub const UPLOAD_FIELD: &str = "uploadedEnv";

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(welcome))
        .route("/health", get(health))
        .route("/env", get(list_projects))
        .route("/env/", get(list_projects))
        .route(
            "/env/{project_name}",
            get(get_project)
                .post(create_project)
                .put(update_project)
                .delete(delete_project),
        )
        .route("/env/{project_name}/download", get(download_project))
        .route("/env/{project_name}/upload", post(upload_project))
}

async fn welcome() -> &'static str {
    "Welcome to Environment-Server!"
}

async fn health() -> &'static str {
    "OK"
}

// =============================================================================
// Projects
// =============================================================================

async fn list_projects(
    State(app): State<Arc<App>>,
) -> Result<Json<ProjectNamesResponse>, ApiError> {
    let names = app.use_cases.projects.crud.list_names().await?;
    Ok(Json(ProjectNamesResponse {
        available_project_names: names.into_iter().map(String::from).collect(),
    }))
}

async fn get_project(
    State(app): State<Arc<App>>,
    Path(project_name): Path<String>,
) -> Result<Json<ProjectResponse>, ApiError> {
    let name = validation::project_name(project_name)?;
    let project = app.use_cases.projects.crud.get(&name).await?;
    Ok(Json(project_response(project)))
}

async fn download_project(
    State(app): State<Arc<App>>,
    Path(project_name): Path<String>,
) -> Result<Response, ApiError> {
    let name = validation::project_name(project_name)?;
    let export = app.use_cases.projects.export.execute(&name).await?;

    let disposition = HeaderValue::from_str(&format!("attachment; filename={}", export.file_name))
        .map_err(|e| ApiError::Internal(format!("content-disposition for {}: {}", name, e)))?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, HeaderValue::from_static("text/plain")),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        export.contents,
    )
        .into_response())
}

async fn create_project(
    State(app): State<Arc<App>>,
    Path(project_name): Path<String>,
    payload: Result<Json<EnvironmentRequest>, JsonRejection>,
) -> Result<(StatusCode, String), ApiError> {
    let name = validation::project_name(project_name)?;
    let Json(request) = payload.map_err(json_rejection)?;
    let environment = validation::environment(request.environment)?;

    let project = app
        .use_cases
        .projects
        .crud
        .create(name, EnvironmentSource::Map(environment))
        .await?;

    Ok((
        StatusCode::CREATED,
        format!("Environment for project '{}' created.", project.name()),
    ))
}

async fn upload_project(
    State(app): State<Arc<App>>,
    Path(project_name): Path<String>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<(StatusCode, String), ApiError> {
    let name = validation::project_name(project_name)?;
    let mut multipart = multipart.map_err(|e| {
        ApiError::validation(ValidationLocation::File, UPLOAD_FIELD, e.body_text())
    })?;

    let mut uploaded = None;
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        ApiError::validation(ValidationLocation::File, UPLOAD_FIELD, e.body_text())
    })? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let bytes = field.bytes().await.map_err(|e| {
            ApiError::validation(ValidationLocation::File, UPLOAD_FIELD, e.body_text())
        })?;
        uploaded = Some(bytes.to_vec());
    }

    let contents = uploaded.ok_or_else(|| {
        ApiError::validation(
            ValidationLocation::File,
            UPLOAD_FIELD,
            format!("a .env file must be uploaded in the '{}' field", UPLOAD_FIELD),
        )
    })?;

    let project = app
        .use_cases
        .projects
        .crud
        .create(name, EnvironmentSource::EnvFile(contents))
        .await?;

    Ok((
        StatusCode::CREATED,
        format!(
            "Environment for project '{}' created from uploaded file.",
            project.name()
        ),
    ))
}

async fn update_project(
    State(app): State<Arc<App>>,
    Path(project_name): Path<String>,
    payload: Result<Json<EnvironmentRequest>, JsonRejection>,
) -> Result<Json<UpdatedProjectResponse>, ApiError> {
    let name = validation::project_name(project_name)?;
    let Json(request) = payload.map_err(json_rejection)?;
    let partial = validation::environment(request.environment)?;

    let project = app.use_cases.projects.crud.update(&name, &partial).await?;

    Ok(Json(UpdatedProjectResponse {
        message: format!("Environment for project '{}' updated.", name),
        updated_environment: project_record(project),
    }))
}

async fn delete_project(
    State(app): State<Arc<App>>,
    Path(project_name): Path<String>,
) -> Result<Json<DeletedProjectResponse>, ApiError> {
    let name = validation::project_name(project_name)?;
    let project = app.use_cases.projects.crud.delete(&name).await?;
    Ok(Json(DeletedProjectResponse {
        deleted_environment: project_record(project),
    }))
}

fn json_rejection(rejection: JsonRejection) -> ApiError {
    ApiError::validation(ValidationLocation::Body, "body", rejection.body_text())
}
