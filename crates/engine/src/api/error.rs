//! HTTP error mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use envhub_shared::{
    ErrorResponse, ValidationErrorDetail, ValidationErrorResponse, ValidationLocation,
};

use crate::use_cases::projects::ProjectError;

#[derive(Debug)]
pub enum ApiError {
    /// 422 with one entry per rejected input.
    Validation(Vec<ValidationErrorDetail>),
    /// 404 naming the project.
    NotFound(String),
    /// 422 for a create whose name is already taken.
    Duplicate(String),
    /// 500; the detail is logged, never sent.
    Internal(String),
}

impl ApiError {
    /// A single-entry validation error.
    pub fn validation(
        location: ValidationLocation,
        param: impl Into<String>,
        msg: impl Into<String>,
    ) -> Self {
        Self::Validation(vec![ValidationErrorDetail::new(location, param, msg)])
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ValidationErrorResponse { errors }),
            )
                .into_response(),
            ApiError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorResponse::new(msg))).into_response()
            }
            ApiError::Duplicate(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorResponse::new(msg)),
            )
                .into_response(),
            ApiError::Internal(detail) => {
                tracing::error!(error = %detail, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::new("Internal server error")),
                )
                    .into_response()
            }
        }
    }
}

impl From<ProjectError> for ApiError {
    fn from(e: ProjectError) -> Self {
        match e {
            ProjectError::NotFound(_) => ApiError::NotFound(e.to_string()),
            ProjectError::DuplicateProject(_) => ApiError::Duplicate(e.to_string()),
            ProjectError::Repo(_) => ApiError::Internal(e.to_string()),
        }
    }
}
