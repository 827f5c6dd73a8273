// src/output/report.rs

use crate::constants::UTF8_BOM;
use crate::core_types::FileRecord;
use crate::errors::{Error, Result};
use crate::output::formatter::{format_confidence, format_path_for_display};
use log::info;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// One CSV row. Field order is the column order of the report.
#[derive(Debug, Serialize)]
struct ReportRow<'a> {
    path: String,
    size: u64,
    encoding: String,
    confidence: String,
    has_bom: bool,
    bom_type: &'a str,
    binary: bool,
    action: &'a str,
    reason: &'a str,
}

impl<'a> From<&'a FileRecord> for ReportRow<'a> {
    fn from(record: &'a FileRecord) -> Self {
        ReportRow {
            path: format_path_for_display(&record.file.relative_path),
            size: record.file.size,
            encoding: record.detection.encoding_name().unwrap_or_default(),
            confidence: if record.detection.encoding.is_some() {
                format_confidence(&record.detection)
            } else {
                String::new()
            },
            has_bom: record.detection.has_bom(),
            bom_type: record.detection.bom.as_str(),
            binary: record.detection.is_binary,
            action: record.action.as_str(),
            reason: &record.reason,
        }
    }
}

/// Writes every record to `writer` as CSV, header row first.
pub fn write_csv<W: Write>(writer: W, records: &[FileRecord]) -> std::result::Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in records {
        csv_writer.serialize(ReportRow::from(record))?;
    }
    if records.is_empty() {
        csv_writer.write_record([
            "path",
            "size",
            "encoding",
            "confidence",
            "has_bom",
            "bom_type",
            "binary",
            "action",
            "reason",
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Writes the CSV report to `path`, UTF-8 with a BOM so spreadsheet tools
/// pick the right encoding.
///
/// # Errors
/// Returns [`Error::Report`] if the file cannot be created or written.
pub fn write_report(path: &Path, records: &[FileRecord]) -> Result<()> {
    let to_error = |source: csv::Error| Error::Report {
        path: path.display().to_string(),
        source,
    };

    let file = File::create(path).map_err(|e| to_error(e.into()))?;
    let mut writer = BufWriter::new(file);
    writer.write_all(UTF8_BOM).map_err(|e| to_error(e.into()))?;
    write_csv(&mut writer, records).map_err(to_error)?;
    writer.flush().map_err(|e| to_error(e.into()))?;

    info!("Report written to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::Outcome;
    use crate::output::tests::mock_record;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_csv_columns_and_rows() {
        let records = vec![
            mock_record("src/a.cpp", Outcome::WouldConvert, "re-encode gb18030 -> utf-8-sig"),
            mock_record("b.h", Outcome::Failed, "write failed: denied, really"),
        ];
        let mut out = Vec::new();
        write_csv(&mut out, &records).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "path,size,encoding,confidence,has_bom,bom_type,binary,action,reason"
        );
        assert_eq!(
            lines[1],
            "src/a.cpp,42,gb18030,1.00,false,none,false,convert,re-encode gb18030 -> utf-8-sig"
        );
        assert_eq!(
            lines[2],
            "b.h,42,gb18030,1.00,false,none,false,error,\"write failed: denied, really\""
        );
    }

    #[test]
    fn test_empty_report_has_header() {
        let mut out = Vec::new();
        write_csv(&mut out, &[]).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "path,size,encoding,confidence,has_bom,bom_type,binary,action,reason\n"
        );
    }

    #[test]
    fn test_report_file_starts_with_bom() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.csv");
        let records = vec![mock_record("a.h", Outcome::Skipped, "binary file")];
        write_report(&path, &records).unwrap();
        let bytes = fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"\xEF\xBB\xBFpath,size,"));
    }

    #[test]
    fn test_report_into_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope").join("report.csv");
        let err = write_report(&path, &[]).unwrap_err();
        assert!(matches!(err, Error::Report { .. }));
    }
}
