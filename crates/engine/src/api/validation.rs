//! Request validation.
//!
//! Every problem found is reported at once, so clients see the full list
//! in a single 422.

use envhub_domain::{EnvironmentMap, ProjectName};
use envhub_shared::{ValidationErrorDetail, ValidationLocation};
use serde_json::Value;

use super::error::ApiError;

const PROJECT_NAME_PARAM: &str = "projectName";
const ENVIRONMENT_PARAM: &str = "environment";

pub(crate) fn project_name(raw: String) -> Result<ProjectName, ApiError> {
    ProjectName::new(raw).map_err(|e| {
        ApiError::validation(ValidationLocation::Params, PROJECT_NAME_PARAM, e.message())
    })
}

/// Turn the `environment` field of a request body into an environment map.
///
/// Strings are kept as-is; numbers and booleans are stored as their JSON
/// text. `null`, arrays and nested objects are rejected.
pub(crate) fn environment(value: Option<Value>) -> Result<EnvironmentMap, ApiError> {
    let object = match value {
        None => {
            return Err(ApiError::validation(
                ValidationLocation::Body,
                ENVIRONMENT_PARAM,
                "environment is required",
            ))
        }
        Some(Value::Object(object)) => object,
        Some(_) => {
            return Err(ApiError::validation(
                ValidationLocation::Body,
                ENVIRONMENT_PARAM,
                "environment must be an object of key/value pairs",
            ))
        }
    };

    let mut environment = EnvironmentMap::new();
    let mut errors = Vec::new();

    for (key, value) in object {
        let param = format!("{}.{}", ENVIRONMENT_PARAM, key);
        let value = match value {
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Null | Value::Array(_) | Value::Object(_) => {
                errors.push(ValidationErrorDetail::new(
                    ValidationLocation::Body,
                    param,
                    format!("value of '{}' must be a string, number or boolean", key),
                ));
                continue;
            }
        };
        if let Err(e) = environment.insert(key, value) {
            errors.push(ValidationErrorDetail::new(
                ValidationLocation::Body,
                param,
                e.message(),
            ));
        }
    }

    if errors.is_empty() {
        Ok(environment)
    } else {
        Err(ApiError::Validation(errors))
    }
}
