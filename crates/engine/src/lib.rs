//! envhub Engine library.
//!
//! This crate contains all server-side code for envhub, a small HTTP
//! service that stores named sets of environment variables.
//!
//! ## Structure
//!
//! - `use_cases/` - Project business rules (create, merge-on-update, export)
//! - `infrastructure/` - Ports, the SQLite store, clock and configuration
//! - `api/` - HTTP entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
