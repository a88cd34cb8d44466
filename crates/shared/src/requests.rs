//! Request bodies.

use serde::{Deserialize, Serialize};

/// Body of `POST /env/{projectName}` and `PUT /env/{projectName}`.
///
/// `environment` is kept as raw JSON so the server can report precisely
/// which part of it is unacceptable instead of failing the whole decode.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<serde_json::Value>,
}

impl EnvironmentRequest {
    pub fn new(environment: serde_json::Value) -> Self {
        Self {
            environment: Some(environment),
        }
    }
}
