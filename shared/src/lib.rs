//! Shared types and validation for the FarmEasy platform
//!
//! This crate contains types shared between the backend server and any
//! future components (CLI tooling, importers) of the system.

pub mod types;
pub mod validation;

pub use types::*;
pub use validation::*;
