//! Response bodies for the HTTP API.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// Success bodies
// =============================================================================

/// `GET /env`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectNamesResponse {
    pub available_project_names: Vec<String>,
}

/// `GET /env/{projectName}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectResponse {
    pub project_name: String,
    pub environment_map: BTreeMap<String, String>,
}

/// The full stored record, as returned by update and delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: Uuid,
    pub project_name: String,
    pub environment_map: BTreeMap<String, String>,
    /// RFC 3339
    pub created_at: String,
    /// RFC 3339
    pub updated_at: String,
}

/// `PUT /env/{projectName}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatedProjectResponse {
    pub message: String,
    pub updated_environment: ProjectRecord,
}

/// `DELETE /env/{projectName}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedProjectResponse {
    pub deleted_environment: ProjectRecord,
}

// =============================================================================
// Error bodies
// =============================================================================

/// Body for 404, duplicate-name and internal errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Where a rejected input came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationLocation {
    Body,
    Params,
    File,
}

/// One rejected input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrorDetail {
    pub location: ValidationLocation,
    pub param: String,
    pub msg: String,
}

impl ValidationErrorDetail {
    pub fn new(location: ValidationLocation, param: impl Into<String>, msg: impl Into<String>) -> Self {
        Self {
            location,
            param: param.into(),
            msg: msg.into(),
        }
    }
}

/// Body for 422 validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrorResponse {
    pub errors: Vec<ValidationErrorDetail>,
}
