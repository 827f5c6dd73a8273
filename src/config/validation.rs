// src/config/validation.rs

use crate::errors::ConfigError;
use glob::Pattern;

/// The confidence threshold must be a number within `[0, 1]`.
pub(super) fn validate_min_confidence(value: f32) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            option: "--min-confidence".to_string(),
            reason: format!("{} is not within 0.0..=1.0", value),
        })
    }
}

/// Every `--ignore` pattern must compile as a glob.
pub(super) fn validate_ignore_patterns(patterns: Option<&[String]>) -> Result<(), ConfigError> {
    for p in patterns.unwrap_or_default() {
        Pattern::new(p).map_err(|e| ConfigError::InvalidValue {
            option: "--ignore".to_string(),
            reason: format!("invalid glob '{}': {}", p, e),
        })?;
    }
    Ok(())
}
