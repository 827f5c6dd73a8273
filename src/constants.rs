// src/constants.rs

/// Number of leading bytes inspected by the binary classifier.
pub const PROBE_WINDOW: usize = 4096;

/// Fraction of non-printable bytes in the probe above which a file is binary.
pub const NON_PRINTABLE_THRESHOLD: f64 = 0.30;

/// Default confidence below which a conversion needs `--force`.
pub const DEFAULT_MIN_CONFIDENCE: f32 = 0.20;

/// Default target encoding (UTF-8 with BOM).
pub const DEFAULT_TARGET: &str = "utf-8-sig";

/// Extensions scanned when `--ext` is not given.
pub const DEFAULT_EXTENSIONS: &[&str] = &["h", "hpp", "cpp"];

/// Suffix appended to a file name to form its backup sibling.
pub const BACKUP_SUFFIX: &str = ".bak";

/// Prefix of the temporary files created next to a file being rewritten.
pub const TEMP_FILE_PREFIX: &str = ".enconv-";

/// Default number of rows printed in the console preview.
pub const DEFAULT_MAX_PRINT: usize = 200;

/// Header line of the summary block.
pub const SUMMARY_HEADER: &str = "[SUMMARY]";

/// Separator used around the console preview table.
pub const PREVIEW_SEPARATOR_WIDTH: usize = 100;

/// The UTF-8 byte-order mark.
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";
