//! Aggregate roots - domain objects that own their related data
//!
//! Each aggregate:
//! - Has a unique identity
//! - Exposes behavior through methods, not public fields
//! - Takes timestamps as arguments so callers control the clock

pub mod project;

pub use project::Project;
