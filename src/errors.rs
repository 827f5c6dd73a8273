//! Defines application-specific error types.
//!
//! Two families live here. [`Error`] and [`ConfigError`] are fatal for a run:
//! a bad root path or an invalid option stops everything before any file is
//! touched. [`FileCondition`] is the per-file taxonomy: every file ends with
//! exactly one outcome, and the conditions below explain skips, refusals and
//! failures without ever aborting the batch.

use thiserror::Error;

/// Fatal errors for a run of `enconv`.
#[derive(Error, Debug)]
pub enum Error {
    /// Error occurring during file or directory access (read, write, metadata).
    #[error("I/O error accessing path '{path}': {source}")]
    Io {
        /// The path that caused the I/O error.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration settings or combinations.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// The root directory (or file) to scan does not exist.
    #[error("Root path does not exist: '{0}'")]
    RootNotFound(String),

    /// Writing the CSV report failed.
    #[error("Failed to write report '{path}': {source}")]
    Report {
        /// Destination of the report.
        path: String,
        /// The underlying CSV (or I/O) error.
        #[source]
        source: csv::Error,
    },

    /// The operation was cancelled by the user (e.g., Ctrl+C).
    #[error("Operation cancelled by user (Ctrl+C)")]
    Interrupted,

    /// No files matched the discovery criteria.
    #[error("No files found matching the specified criteria.")]
    NoFilesFound,
}

/// Errors raised while validating options into a [`crate::Config`].
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// An option received a value outside its accepted range or format.
    #[error("Invalid value for {option}: {reason}")]
    InvalidValue {
        /// The offending option, e.g. `--min-confidence`.
        option: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// The requested target encoding is unknown.
    #[error("Unknown target encoding: '{0}'")]
    UnknownEncoding(String),

    /// The requested target encoding exists but cannot be produced.
    #[error("Unsupported target encoding '{name}': {reason}")]
    UnsupportedTarget {
        /// The encoding name as given.
        name: String,
        /// Why it cannot be a target.
        reason: String,
    },
}

/// Per-file conditions. Their `Display` text is the reason shown in the
/// console preview, the log line and the CSV report.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FileCondition {
    /// The probe (or the full buffer) looks binary.
    #[error("binary file")]
    BinarySkip,

    /// Nothing to convert.
    #[error("empty file")]
    EmptyFileSkip,

    /// UTF-16 / UTF-32 input is never transcoded.
    #[error("wide encoding not transcoded ({bom} BOM)")]
    WideBomUnsupported {
        /// Name of the detected BOM, e.g. `utf-16le`.
        bom: &'static str,
    },

    /// No candidate encoding decoded the buffer.
    #[error("unknown encoding (use --force to override)")]
    UnknownEncoding,

    /// The text itself begins with U+FEFF, which BOM-less UTF-8 output
    /// cannot carry: it would be read back as a BOM.
    #[error("text starts with U+FEFF, cannot be written without a BOM")]
    LeadingFeffInText,

    /// The detector was not sure enough.
    #[error("low confidence {confidence:.2} (< {min_confidence:.2})")]
    LowConfidenceSkip {
        /// Confidence reported by the detector.
        confidence: f32,
        /// Configured threshold.
        min_confidence: f32,
    },

    /// The bytes already have the target encoding and BOM state.
    #[error("already target form")]
    AlreadyTarget,

    /// Decoding with the source encoding failed.
    #[error("decode with {encoding} failed: {detail}")]
    DecodeFailure {
        /// Source encoding name.
        encoding: String,
        /// What went wrong.
        detail: String,
    },

    /// The text cannot be represented in the target encoding.
    #[error("encode to {encoding} failed: {detail}")]
    EncodeFailure {
        /// Target encoding name.
        encoding: String,
        /// What went wrong.
        detail: String,
    },

    /// The file could not be read.
    #[error("read failed: {0}")]
    ReadFailure(String),

    /// Writing the `.bak` sibling failed; the original is untouched.
    #[error("backup failed: {0}")]
    BackupFailure(String),

    /// Writing or renaming the new content failed; the original is untouched.
    #[error("write failed: {0}")]
    WriteFailure(String),
}

/// A `Result` alias using the crate's fatal [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create an `Error::Io` with path context.
///
/// # Arguments
/// * `source` - The original `std::io::Error`.
/// * `path` - The path associated with the error, convertible to `AsRef<std::path::Path>`.
///
/// # Returns
/// An `Error::Io` variant containing the path string and the source error.
pub fn io_error_with_path<P: AsRef<std::path::Path>>(source: std::io::Error, path: P) -> Error {
    Error::Io {
        path: path.as_ref().display().to_string(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{io, path::PathBuf};

    #[test]
    fn test_io_error_with_path_helper() {
        let path = PathBuf::from("some/test/path.cpp");
        let source_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let err = io_error_with_path(source_error, &path);

        match err {
            Error::Io {
                path: error_path,
                source,
            } => {
                assert!(error_path.contains("some/test/path.cpp"));
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            _ => panic!("Expected Error::Io"),
        }
    }

    #[test]
    fn test_condition_messages_used_as_reasons() {
        assert_eq!(FileCondition::BinarySkip.to_string(), "binary file");
        assert_eq!(FileCondition::EmptyFileSkip.to_string(), "empty file");
        assert_eq!(
            FileCondition::AlreadyTarget.to_string(),
            "already target form"
        );
        assert_eq!(
            FileCondition::WideBomUnsupported { bom: "utf-16le" }.to_string(),
            "wide encoding not transcoded (utf-16le BOM)"
        );
        assert_eq!(
            FileCondition::LowConfidenceSkip {
                confidence: 0.1,
                min_confidence: 0.2
            }
            .to_string(),
            "low confidence 0.10 (< 0.20)"
        );
    }

    #[test]
    fn test_config_error_is_wrapped() {
        let err: Error = ConfigError::UnknownEncoding("klingon".to_string()).into();
        assert_eq!(
            err.to_string(),
            "Invalid configuration: Unknown target encoding: 'klingon'"
        );
    }
}
