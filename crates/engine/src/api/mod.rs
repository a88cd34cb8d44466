//! API layer - HTTP entry points.

mod conversions;
mod error;
pub mod http;
mod validation;


pub use error::ApiError;
