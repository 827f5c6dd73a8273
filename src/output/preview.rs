// src/output/preview.rs

use crate::config::OutputConfig;
use crate::constants::PREVIEW_SEPARATOR_WIDTH;
use crate::core_types::{FileRecord, Outcome};
use crate::output::formatter::{
    format_confidence, format_encoding, format_path_for_display, truncate_for_column,
};
use log::debug;
use std::io::{self, Write};

const PATH_WIDTH: usize = 48;

/// Writes the console preview table.
///
/// Only actionable rows (anything but a skip) are listed unless
/// `list_all` is set, and at most `max_print` rows are written.
pub fn write_preview(
    writer: &mut dyn Write,
    records: &[FileRecord],
    opts: &OutputConfig,
) -> io::Result<()> {
    let shown: Vec<&FileRecord> = records
        .iter()
        .filter(|r| opts.list_all || r.outcome != Outcome::Skipped)
        .collect();
    debug!(
        "Preview: {} of {} records eligible, limit {}",
        shown.len(),
        records.len(),
        opts.max_print
    );
    if shown.is_empty() {
        return Ok(());
    }

    writeln!(
        writer,
        "{:<11} {:<width$} {:>8} {:>10} {:>5} {:>9}  REASON",
        "STATUS",
        "PATH",
        "SIZE",
        "ENCODING",
        "CONF",
        "BOM",
        width = PATH_WIDTH
    )?;
    writeln!(writer, "{}", "-".repeat(PREVIEW_SEPARATOR_WIDTH))?;

    for record in shown.iter().take(opts.max_print) {
        let path = format_path_for_display(&record.file.relative_path);
        writeln!(
            writer,
            "{:<11} {:<width$} {:>8} {:>10} {:>5} {:>9}  {}",
            record.outcome.tag(),
            truncate_for_column(&path, PATH_WIDTH),
            record.file.size,
            format_encoding(&record.detection),
            format_confidence(&record.detection),
            record.detection.bom.as_str(),
            record.reason,
            width = PATH_WIDTH
        )?;
    }

    if shown.len() > opts.max_print {
        writeln!(
            writer,
            "... {} more row(s) not shown (raise --max-print to see them)",
            shown.len() - opts.max_print
        )?;
    }
    writeln!(writer, "{}", "-".repeat(PREVIEW_SEPARATOR_WIDTH))?;
    Ok(())
}
