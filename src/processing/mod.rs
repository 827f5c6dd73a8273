//! Handles the per-file stage of the `enconv` pipeline.
//!
//! Each discovered file goes through read → detect → plan → commit on its
//! own; nothing is shared between files except the detector. Cancellation is
//! checked between files only, so a file is never left half-processed.

use crate::cancellation::CancellationToken;
use crate::commit::{commit, CommitError};
use crate::config::Config;
use crate::core_types::{
    ActionKind, BomType, ConversionAction, DetectionResult, FileInfo, FileRecord, Outcome,
};
use crate::detection::{detect, CharsetDetector};
use crate::errors::{Error, FileCondition, Result};
use crate::planning::plan;
use log::{error, info, warn};
use tracing::instrument;

mod content_reader;

use content_reader::{read_candidate, FileContent};

/// Processes discovered files lazily, yielding one [`FileRecord`] per file.
///
/// Per-file problems are part of the record; the iterator only yields an
/// `Err` ([`Error::Interrupted`]) when the token was cancelled before the
/// next file was started. Callers should stop at the first `Err`.
pub fn process_files<'a>(
    files: impl Iterator<Item = FileInfo> + 'a,
    config: &'a Config,
    detector: &'a dyn CharsetDetector,
    token: &'a CancellationToken,
) -> impl Iterator<Item = Result<FileRecord>> + 'a {
    files.map(move |file_info| {
        if token.is_cancelled() {
            return Err(Error::Interrupted);
        }
        Ok(process_file(file_info, config, detector))
    })
}

/// Runs the full pipeline for a single file and logs its outcome line.
#[instrument(level = "debug", skip_all, fields(path = %file_info.relative_path.display()))]
pub fn process_file(
    file_info: FileInfo,
    config: &Config,
    detector: &dyn CharsetDetector,
) -> FileRecord {
    let (detection, action) = match read_candidate(&file_info.absolute_path) {
        Ok(FileContent::Binary { probed }) => (
            DetectionResult::binary(file_info.absolute_path.clone(), probed as u64),
            ConversionAction::Skip(FileCondition::BinarySkip),
        ),
        Ok(FileContent::Text(bytes)) => {
            let detection = detect(&file_info.absolute_path, &bytes, detector);
            let action = plan(
                &detection,
                &bytes,
                &config.conversion.target,
                &config.conversion.plan_policy(),
            );
            (detection, action)
        }
        Err(e) => (
            unread(&file_info),
            ConversionAction::Error(FileCondition::ReadFailure(e.to_string())),
        ),
    };

    let (outcome, reason) = execute(&file_info, action, config);
    let record = FileRecord {
        action: action_for(outcome),
        file: file_info,
        detection,
        outcome,
        reason,
    };
    log_outcome(&record);
    record
}

/// Carries out the planner's decision. Only `Convert` touches the disk.
fn execute(file_info: &FileInfo, action: ConversionAction, config: &Config) -> (Outcome, String) {
    match action {
        ConversionAction::Skip(condition) => (Outcome::Skipped, condition.to_string()),
        ConversionAction::Unsupported(condition) => (Outcome::Unsupported, condition.to_string()),
        ConversionAction::Error(condition) => (Outcome::Failed, condition.to_string()),
        ConversionAction::Convert { reason, .. } if config.dry_run => {
            (Outcome::WouldConvert, reason.to_string())
        }
        ConversionAction::Convert { reason, payload } => {
            match commit(&file_info.absolute_path, &payload, config.conversion.backup) {
                Ok(()) => (Outcome::Converted, reason.to_string()),
                Err(CommitError::Backup(e)) => (
                    Outcome::Failed,
                    FileCondition::BackupFailure(e.to_string()).to_string(),
                ),
                Err(CommitError::Write(e)) => (
                    Outcome::Failed,
                    FileCondition::WriteFailure(e.to_string()).to_string(),
                ),
            }
        }
    }
}

/// The action column of a record: what was decided, or `Error` if carrying it out failed.
fn action_for(outcome: Outcome) -> ActionKind {
    match outcome {
        Outcome::Skipped => ActionKind::Skip,
        Outcome::Unsupported => ActionKind::Unsupported,
        Outcome::WouldConvert | Outcome::Converted => ActionKind::Convert,
        Outcome::Failed => ActionKind::Error,
    }
}

fn unread(file_info: &FileInfo) -> DetectionResult {
    DetectionResult {
        path: file_info.absolute_path.clone(),
        size: 0,
        is_binary: false,
        bom: BomType::None,
        encoding: None,
        confidence: 0.0,
    }
}

fn log_outcome(record: &FileRecord) {
    let path = record.file.relative_path.display();
    let tag = record.outcome.tag();
    match record.outcome {
        Outcome::Failed => error!("[{}] {} | {}", tag, path, record.reason),
        Outcome::Unsupported => warn!("[{}] {} | {}", tag, path, record.reason),
        _ => info!("[{}] {} | {}", tag, path, record.reason),
    }
}
