// src/filtering/mod.rs

//! Provides standalone functions for file filtering logic.
//!
//! These functions are used by the discovery stage to decide which walked
//! entries become candidates for conversion.

mod artifact;
mod extension;
mod size;

pub use artifact::is_conversion_artifact;
pub use extension::passes_extension_filters;
pub use size::within_size_limit;
