//! envhub Shared - Wire types for the HTTP API
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde, serde_json and uuid
//! 2. **No business logic** - Pure data types and serialization
//! 3. **No domain IDs** - use raw `uuid::Uuid` in DTOs
//! 4. **camelCase on the wire** - field names match what existing clients send and read

pub mod requests;
pub mod responses;

pub use requests::EnvironmentRequest;
pub use responses::{
    DeletedProjectResponse, ErrorResponse, ProjectNamesResponse, ProjectRecord, ProjectResponse,
    UpdatedProjectResponse, ValidationErrorDetail, ValidationErrorResponse, ValidationLocation,
};
