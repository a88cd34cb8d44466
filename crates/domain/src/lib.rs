//! envhub domain.
//!
//! Pure types shared by every layer of the service:
//!
//! - `aggregates/` - the `Project` aggregate root
//! - `value_objects/` - validated `ProjectName` and `EnvironmentMap`
//! - `env_file` - conversion between environment maps and `.env` text
//! - `ids` - typed identifiers
//!
//! Nothing in this crate performs I/O.

pub mod aggregates;
pub mod env_file;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use aggregates::Project;
pub use error::DomainError;
pub use ids::ProjectId;
pub use value_objects::{EnvironmentMap, ProjectName};
