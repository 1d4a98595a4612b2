//! DietWise Shared Library
//!
//! This crate contains the profile types, nutrition calculations, validation and
//! tracking helpers used by the browser (WASM) bindings and the backend service.

pub mod calculations;
pub mod errors;
pub mod profile;
pub mod tracking;
pub mod types;
pub mod units;
pub mod validation;

// Re-export commonly used items
pub use calculations::*;
pub use errors::*;
pub use profile::*;
pub use units::*;
