//! Defines the core `Config` struct and related types for application configuration.
//!
//! This module consolidates all the settings parsed and validated from the CLI,
//! making them available to the rest of the application in a structured and
//! type-safe manner.

use crate::codec::ErrorMode;
use crate::constants::{DEFAULT_MAX_PRINT, DEFAULT_MIN_CONFIDENCE};
use crate::core_types::TargetSpec;
use crate::detection::DetectorKind;
use crate::planning::PlanPolicy;
use encoding_rs::Encoding;
use std::path::PathBuf;

pub use builder::ConfigBuilder;
pub use path_resolve::{resolve_input, ResolvedInput};
pub use target::{resolve_source_encoding, resolve_target};

mod builder;
mod parsing;
pub mod path_resolve;
mod target;
mod validation;

/// Configuration options related to file discovery and filtering.
#[derive(Debug, Clone)]
pub struct DiscoveryConfig {
    /// Whether to recurse into subdirectories.
    pub recursive: bool,
    /// Extensions (lowercase, no leading dot) to include. `None` accepts every extension.
    pub extensions: Option<Vec<String>>,
    /// Extensions (lowercase) to exclude. Takes precedence over `extensions`.
    pub exclude_extensions: Option<Vec<String>>,
    /// Glob patterns, relative to the input path, whose matches are skipped.
    pub ignore_patterns: Option<Vec<String>>,
    /// Whether hidden files and directories are walked.
    pub include_hidden: bool,
    /// Whether to respect `.gitignore`, `.ignore`, and other VCS ignore files.
    pub use_gitignore: bool,
    /// Maximum file size in bytes. Files larger than this will be skipped.
    pub max_size: Option<u64>,
}

/// What to convert to, and how careful to be about it.
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    pub target: TargetSpec,
    pub min_confidence: f32,
    pub force: bool,
    pub errors: ErrorMode,
    /// Source encoding for files the detector cannot identify.
    pub assume_encoding: Option<&'static Encoding>,
    /// Write a `.bak` sibling before the first conversion of a file.
    pub backup: bool,
    pub detector: DetectorKind,
}

impl ConversionConfig {
    /// The subset of settings the planner needs.
    pub fn plan_policy(&self) -> PlanPolicy {
        PlanPolicy {
            min_confidence: self.min_confidence,
            force: self.force,
            errors: self.errors,
            assume_encoding: self.assume_encoding,
        }
    }
}

/// Configuration options related to console and report output.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Include skipped files in the console preview.
    pub list_all: bool,
    /// Maximum number of preview rows.
    pub max_print: usize,
    /// Destination of the CSV report, if any.
    pub report_path: Option<PathBuf>,
}

/// Represents the fully resolved configuration for a run.
#[derive(Debug, Clone)]
pub struct Config {
    /// The original, unresolved path to the directory or file to scan.
    pub input_path: String,
    /// Configuration for the discovery stage.
    pub discovery: DiscoveryConfig,
    /// Configuration for detection, planning and writing.
    pub conversion: ConversionConfig,
    /// Configuration for the preview, summary and report.
    pub output: OutputConfig,
    /// Detect and plan only; never write.
    pub dry_run: bool,
    /// Exit with code 3 when unsupported files were found.
    pub fail_on_unsupported: bool,
}

impl Config {
    /// Creates a default `Config` for testing purposes.
    ///
    /// Unlike the CLI defaults, no extension filter is set.
    #[doc(hidden)]
    pub fn new_for_test() -> Self {
        Self {
            input_path: ".".to_string(),
            discovery: DiscoveryConfig {
                recursive: true,
                extensions: None,
                exclude_extensions: None,
                ignore_patterns: None,
                include_hidden: false,
                use_gitignore: true,
                max_size: None,
            },
            conversion: ConversionConfig {
                target: TargetSpec::utf8_sig(),
                min_confidence: DEFAULT_MIN_CONFIDENCE,
                force: false,
                errors: ErrorMode::Strict,
                assume_encoding: None,
                backup: false,
                detector: DetectorKind::Strict,
            },
            output: OutputConfig {
                list_all: false,
                max_print: DEFAULT_MAX_PRINT,
                report_path: None,
            },
            dry_run: false,
            fail_on_unsupported: false,
        }
    }
}
