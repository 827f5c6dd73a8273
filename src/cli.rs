// src/cli.rs

use crate::codec::ErrorMode;
use crate::constants::{DEFAULT_MAX_PRINT, DEFAULT_MIN_CONFIDENCE, DEFAULT_TARGET};
use crate::detection::DetectorKind;
use clap::Parser;

/// Detects the text encoding of source files and converts them to a single
/// target encoding (UTF-8 with BOM by default).
///
/// enconv walks a directory (respecting .gitignore rules), skips binary and
/// wide-encoded files, sniffs the encoding of everything else and rewrites
/// the files that are not yet in the target form. Writes are atomic: a file
/// is either fully converted or left exactly as it was.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory (or single file) to scan.
    #[arg(default_value = ".")]
    pub input_path: String,

    // --- Filtering Options ---
    /// Include only files with these extensions (case-insensitive, repeatable, comma lists accepted).
    #[arg(short = 'e', long = "ext", value_name = "EXT", num_args = 1.., default_values_t = ["h".to_string(), "hpp".to_string(), "cpp".to_string()])]
    pub extensions: Vec<String>,

    /// Exclude files with these extensions (case-insensitive, repeatable).
    #[arg(short = 'x', long = "exclude-ext", value_name = "EXT", num_args = 1..)]
    pub exclude_extensions: Option<Vec<String>>,

    /// Ignore files/directories matching these glob patterns (relative to the input path, repeatable).
    #[arg(short = 'i', long = "ignore", value_name = "GLOB", num_args = 1..)]
    pub ignore_patterns: Option<Vec<String>>,

    /// Do not recurse into subdirectories.
    #[arg(short = 'n', long, action = clap::ArgAction::SetTrue)]
    pub no_recursive: bool,

    /// Include hidden files and directories.
    #[arg(short = 'H', long, action = clap::ArgAction::SetTrue)]
    pub include_hidden: bool,

    /// Do not respect .gitignore, .ignore, or other VCS ignore files.
    #[arg(short = 't', long, action = clap::ArgAction::SetTrue)]
    pub no_gitignore: bool,

    /// Skip files larger than this size (e.g., "512k", "2MiB").
    #[arg(short = 'm', long, value_name = "BYTES")]
    pub max_size: Option<String>,

    // --- Conversion Options ---
    /// Target encoding (utf-8-sig, utf-8, gb18030, gbk, big5, shift_jis, ... and common aliases).
    #[arg(short = 'T', long = "to", value_name = "ENCODING", default_value = DEFAULT_TARGET)]
    pub target: String,

    /// How malformed bytes are handled when decoding.
    #[arg(long, value_enum, value_name = "MODE", default_value_t = ErrorMode::Strict)]
    pub errors: ErrorMode,

    /// Source encoding to try when detection fails (files that do not decode with it are errors).
    #[arg(long, value_name = "ENCODING")]
    pub assume_encoding: Option<String>,

    /// Skip files whose detection confidence is below this value (0.0 to 1.0).
    #[arg(long, value_name = "FLOAT", default_value_t = DEFAULT_MIN_CONFIDENCE)]
    pub min_confidence: f32,

    /// Convert unknown and low-confidence files anyway (unknown files are decoded as UTF-8).
    #[arg(short = 'f', long, action = clap::ArgAction::SetTrue)]
    pub force: bool,

    /// Charset detection strategy.
    #[arg(long, value_enum, value_name = "KIND", default_value_t = DetectorKind::Strict)]
    pub detector: DetectorKind,

    /// Keep a copy of each original as `<file>.bak` (an existing backup is never overwritten).
    #[arg(short = 'b', long, action = clap::ArgAction::SetTrue)]
    pub backup: bool,

    // --- Reporting ---
    /// Write a CSV report of every scanned file.
    #[arg(short = 'r', long = "report", value_name = "FILE")]
    pub report: Option<String>,

    /// Maximum number of rows in the console preview.
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_PRINT)]
    pub max_print: usize,

    /// Also list skipped files in the console preview.
    #[arg(short = 'a', long, action = clap::ArgAction::SetTrue)]
    pub list_all: bool,

    /// Exit with code 3 when unsupported files were found.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub fail_on_unsupported: bool,

    // --- Execution Control ---
    /// Perform a dry run. Detect and plan, but never write.
    #[arg(short = 'D', long, action = clap::ArgAction::SetTrue)]
    pub dry_run: bool,
}
