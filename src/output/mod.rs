// src/output/mod.rs

//! Collects per-file records and renders them: a bounded console preview,
//! the summary block and the optional CSV report. Nothing here influences
//! what happens to a file.

use crate::core_types::{FileRecord, Outcome};

pub mod formatter;
pub mod preview;
pub mod report;
pub mod summary;

/// Number of files per final outcome.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Counts {
    pub scanned: usize,
    pub skipped: usize,
    pub unsupported: usize,
    pub would_convert: usize,
    pub converted: usize,
    pub errors: usize,
}

impl Counts {
    fn add(&mut self, outcome: Outcome) {
        self.scanned += 1;
        match outcome {
            Outcome::Skipped => self.skipped += 1,
            Outcome::Unsupported => self.unsupported += 1,
            Outcome::WouldConvert => self.would_convert += 1,
            Outcome::Converted => self.converted += 1,
            Outcome::Failed => self.errors += 1,
        }
    }
}

/// Accumulates one [`FileRecord`] per processed file, in processing order.
#[derive(Debug, Default)]
pub struct Reporter {
    records: Vec<FileRecord>,
    counts: Counts,
}

impl Reporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, record: FileRecord) {
        self.counts.add(record.outcome);
        self.records.push(record);
    }

    pub fn records(&self) -> &[FileRecord] {
        &self.records
    }

    pub fn counts(&self) -> Counts {
        self.counts
    }

    pub fn into_records(self) -> Vec<FileRecord> {
        self.records
    }
}
