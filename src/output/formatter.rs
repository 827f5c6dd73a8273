// src/output/formatter.rs

//! Provides helper functions for formatting parts of the output.

use crate::core_types::DetectionResult;
use std::path::Path;

/// Formats a path for display in the preview and the report.
///
/// Path separators are always `/`, even on Windows.
///
/// # Examples
/// ```
/// use enconv::output::formatter::format_path_for_display;
/// use std::path::Path;
///
/// assert_eq!(format_path_for_display(Path::new("src/main.cpp")), "src/main.cpp");
/// ```
pub fn format_path_for_display(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Shortens `text` to at most `width` characters, ending in `...` when cut.
pub fn truncate_for_column(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let keep = width.saturating_sub(3);
    let mut out: String = text.chars().take(keep).collect();
    out.push_str("...");
    out
}

/// Detected encoding for display, `-` when there is none.
pub fn format_encoding(detection: &DetectionResult) -> String {
    detection.encoding_name().unwrap_or_else(|| "-".to_string())
}

/// Confidence with two decimals, `-` when no encoding was detected.
pub fn format_confidence(detection: &DetectionResult) -> String {
    match detection.encoding {
        Some(_) => format!("{:.2}", detection.confidence),
        None => "-".to_string(),
    }
}
