//! Value objects - Immutable objects defined by their attributes

mod environment;
mod names;

pub use environment::EnvironmentMap;
pub use names::ProjectName;
