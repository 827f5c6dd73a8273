// src/config/path_resolve.rs

use crate::errors::{Error, Result};
use log::debug;
use std::path::PathBuf;

/// The scan root after resolution.
#[derive(Debug, Clone)]
pub struct ResolvedInput {
    /// Absolute, canonicalized path.
    pub path: PathBuf,
    /// `true` when the root is a single file rather than a directory.
    pub is_file: bool,
    /// The path as the user typed it, for display.
    pub display: String,
}

/// Resolves the input path string to an absolute, canonicalized path.
///
/// # Errors
/// Returns [`Error::RootNotFound`] if the path does not exist or cannot be resolved.
pub fn resolve_input(input_path_str: &str) -> Result<ResolvedInput> {
    let path = PathBuf::from(input_path_str)
        .canonicalize()
        .map_err(|e| {
            debug!("Failed to canonicalize '{}': {}", input_path_str, e);
            Error::RootNotFound(input_path_str.to_string())
        })?;
    let is_file = path.is_file();
    debug!("Resolved input '{}' to {:?} (file: {})", input_path_str, path, is_file);
    Ok(ResolvedInput {
        path,
        is_file,
        display: input_path_str.to_string(),
    })
}
