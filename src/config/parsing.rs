// src/config/parsing.rs

use crate::errors::ConfigError;
use byte_unit::Byte;
use std::str::FromStr;

/// Parses the optional max size string into `Option<u64>`.
pub(super) fn parse_max_size(max_size_str: Option<&str>) -> Result<Option<u64>, ConfigError> {
    max_size_str
        .map(|s| {
            Byte::from_str(s)
                .map(|b| b.as_u64())
                .map_err(|e| ConfigError::InvalidValue {
                    option: "--max-size".to_string(),
                    reason: format!("invalid size format '{}': {}", s, e),
                })
        })
        .transpose()
}

/// Normalizes extension arguments: lowercase, no leading dot, comma lists split.
///
/// `["CPP", ".h", "hpp,cxx"]` becomes `["cpp", "h", "hpp", "cxx"]`.
pub(super) fn normalize_extensions(exts: Option<Vec<String>>) -> Option<Vec<String>> {
    exts.map(|v| {
        v.iter()
            .flat_map(|s| s.split(','))
            .map(|s| s.trim().trim_start_matches('.').to_lowercase())
            .filter(|s| !s.is_empty())
            .collect()
    })
}
