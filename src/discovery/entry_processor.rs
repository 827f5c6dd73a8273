// src/discovery/entry_processor.rs

use crate::config::path_resolve::ResolvedInput;
use crate::config::DiscoveryConfig;
use crate::core_types::FileInfo;
use crate::filtering::{is_conversion_artifact, passes_extension_filters, within_size_limit};
use ignore::DirEntry;
use log::{debug, trace, warn};
use std::path::PathBuf;

/// Processes a single directory entry from the walk.
///
/// Returns `Some(FileInfo)` if the entry is a regular file that passes every
/// filter, `None` otherwise. Walker and metadata errors are logged and the
/// entry is skipped. An explicitly named single file bypasses the extension
/// filter.
pub(crate) fn process_direntry(
    entry_result: Result<DirEntry, ignore::Error>,
    config: &DiscoveryConfig,
    resolved: &ResolvedInput,
) -> Option<FileInfo> {
    let entry = match entry_result {
        Ok(entry) => entry,
        Err(ignore_error) => {
            warn!("Walker error: {}", ignore_error);
            return None;
        }
    };

    let absolute_path = entry.path().to_path_buf();
    trace!("Processing entry: {}", absolute_path.display());

    let relative_path = if resolved.is_file {
        absolute_path
            .file_name()
            .map(PathBuf::from)
            .unwrap_or_else(|| absolute_path.clone())
    } else {
        absolute_path
            .strip_prefix(&resolved.path)
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|_| absolute_path.clone())
    };

    let metadata = match entry.metadata() {
        Ok(md) => md,
        Err(e) => {
            warn!(
                "Skipping entry '{}' due to metadata error: {}",
                absolute_path.display(),
                e
            );
            return None;
        }
    };

    if !metadata.is_file() {
        trace!("Skipping non-file entry: {}", absolute_path.display());
        return None;
    }

    if is_conversion_artifact(&absolute_path) {
        debug!("Skipping backup/temporary file: {}", absolute_path.display());
        return None;
    }

    if !within_size_limit(metadata.len(), config) {
        debug!(
            "Skipping file due to size constraint: {} (Size: {} bytes)",
            absolute_path.display(),
            metadata.len()
        );
        return None;
    }

    if !resolved.is_file && !passes_extension_filters(&absolute_path, config) {
        trace!(
            "Skipping file due to extension filter: {}",
            absolute_path.display()
        );
        return None;
    }

    Some(FileInfo {
        absolute_path,
        relative_path,
        size: metadata.len(),
    })
}
