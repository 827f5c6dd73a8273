//! `enconv` is a library and command-line tool that detects the text encoding
//! of source files and converts them, in place and atomically, to one target
//! encoding (UTF-8 with BOM by default).
//!
//! As a library, it provides a modular pipeline:
//! 1.  **Discover**: walk a directory with gitignore, hidden-file, extension and size filters.
//! 2.  **Detect**: classify binary content, sniff the BOM and the charset.
//! 3.  **Plan**: decide per file to skip, convert, refuse or fail, and build the new bytes.
//! 4.  **Commit**: write the new bytes through a temp file and an atomic rename.
//! 5.  **Report**: console preview, summary counts and an optional CSV report.
//!
//! # Example: Library Usage
//!
//! ```
//! use enconv::{run, CancellationToken, ConfigBuilder};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! let (gbk, _, _) = encoding_rs::GB18030.encode("// 中文注释\nint main() { return 0; }\n");
//! fs::write(dir.path().join("main.cpp"), &gbk).unwrap();
//!
//! let config = ConfigBuilder::new()
//!     .input_path(dir.path().to_str().unwrap())
//!     .build()
//!     .unwrap();
//!
//! let mut console = Vec::new();
//! let summary = run(&config, &CancellationToken::new(), &mut console).unwrap();
//!
//! assert_eq!(summary.counts.converted, 1);
//! assert_eq!(summary.exit_code(false), 0);
//! let converted = fs::read(dir.path().join("main.cpp")).unwrap();
//! assert!(converted.starts_with(b"\xEF\xBB\xBF"));
//! ```

pub mod cancellation;
pub mod cli;
pub mod codec;
pub mod commit;
pub mod config;
pub mod constants;
pub mod core_types;
pub mod detection;
pub mod discovery;
pub mod errors;
pub mod filtering;
pub mod output;
pub mod planning;
pub mod processing;
pub mod signal;

// Re-export key public types for easier use as a library
pub use cancellation::CancellationToken;
pub use config::{Config, ConfigBuilder};
pub use core_types::{ConversionAction, DetectionResult, FileInfo, FileRecord, TargetSpec};
pub use output::Counts;

use crate::config::resolve_input;
use crate::errors::{io_error_with_path, Error, Result};
use crate::output::Reporter;
use log::{debug, info};
use std::io::Write;

/// Exit code when at least one file ended in an error.
pub const EXIT_FILE_ERRORS: i32 = 1;
/// Exit code for an invalid root or configuration.
pub const EXIT_CONFIG_ERROR: i32 = 2;
/// Exit code when unsupported files exist and `--fail-on-unsupported` was given.
pub const EXIT_UNSUPPORTED: i32 = 3;
/// Exit code after Ctrl+C.
pub const EXIT_INTERRUPTED: i32 = 130;

/// What a completed run did.
#[derive(Debug)]
pub struct RunSummary {
    pub counts: Counts,
    /// One record per scanned file, in processing order.
    pub records: Vec<FileRecord>,
}

impl RunSummary {
    /// Process exit code for this run. File errors take precedence over
    /// unsupported files.
    pub fn exit_code(&self, fail_on_unsupported: bool) -> i32 {
        if self.counts.errors > 0 {
            EXIT_FILE_ERRORS
        } else if fail_on_unsupported && self.counts.unsupported > 0 {
            EXIT_UNSUPPORTED
        } else {
            0
        }
    }
}

/// Executes the complete pipeline: discover, detect, plan, commit and report.
///
/// The console preview and summary are written to `writer`; the CSV report
/// (if configured) goes to its own file.
///
/// # Errors
/// * [`Error::RootNotFound`] if the input path does not exist.
/// * [`Error::NoFilesFound`] if no file passed the discovery filters.
/// * [`Error::Interrupted`] if `token` was cancelled. Files processed before
///   that point are reported (and, outside a dry run, converted).
/// * [`Error::Report`] / [`Error::Io`] if the report or console output cannot be written.
pub fn run(config: &Config, token: &CancellationToken, writer: &mut dyn Write) -> Result<RunSummary> {
    let resolved = resolve_input(&config.input_path)?;
    let detector = config.conversion.detector.build();
    info!(
        "Scanning {} (target: {}, detector: {}{})",
        resolved.display,
        config.conversion.target,
        detector.name(),
        if config.dry_run { ", dry run" } else { "" }
    );

    let files = discovery::discover_files(&config.discovery, &resolved);
    let mut reporter = Reporter::new();
    let mut interrupted = false;

    for item in processing::process_files(files, config, detector.as_ref(), token) {
        match item {
            Ok(record) => reporter.record(record),
            Err(Error::Interrupted) => {
                interrupted = true;
                break;
            }
            Err(e) => return Err(e),
        }
    }

    let counts = reporter.counts();
    debug!("Run finished: {:?}", counts);
    if counts.scanned == 0 && !interrupted {
        return Err(Error::NoFilesFound);
    }

    let console_error = |e| io_error_with_path(e, "<console>");
    output::preview::write_preview(writer, reporter.records(), &config.output)
        .map_err(console_error)?;
    output::summary::write_summary(writer, &counts, config.dry_run).map_err(console_error)?;
    writer.flush().map_err(console_error)?;

    if let Some(report_path) = &config.output.report_path {
        output::report::write_report(report_path, reporter.records())?;
    }

    if interrupted {
        return Err(Error::Interrupted);
    }

    Ok(RunSummary {
        counts,
        records: reporter.into_records(),
    })
}
