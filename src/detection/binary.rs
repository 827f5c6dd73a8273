// src/detection/binary.rs

use crate::constants::{NON_PRINTABLE_THRESHOLD, PROBE_WINDOW};
use content_inspector::ContentType;

/// Checks if a byte buffer is likely binary.
///
/// Only the first [`PROBE_WINDOW`] bytes are inspected. `content_inspector`
/// gives the first verdict (NUL bytes, binary magic numbers). Buffers opening
/// with a UTF-16/UTF-32 BOM count as text so that the BOM sniffer can report
/// them as unsupported wide encodings. Otherwise the buffer is binary when it
/// contains a NUL byte or when more than 30% of the probe is ASCII control
/// bytes.
///
/// # Examples
/// ```
/// use enconv::detection::classify;
///
/// assert!(!classify(b"int main() { return 0; }\n"));
/// assert!(classify(b"abc\0def"));
/// // GB18030 "\xd6\xd0\xce\xc4" is text, not noise.
/// assert!(!classify(b"// \xd6\xd0\xce\xc4\n"));
/// ```
pub fn classify(bytes: &[u8]) -> bool {
    classify_with(bytes, PROBE_WINDOW, NON_PRINTABLE_THRESHOLD)
}

/// [`classify`] with an explicit probe window and threshold.
pub fn classify_with(bytes: &[u8], probe_window: usize, threshold: f64) -> bool {
    let probe = &bytes[..bytes.len().min(probe_window)];
    if probe.is_empty() {
        return false;
    }

    match content_inspector::inspect(probe) {
        ContentType::BINARY => return true,
        ContentType::UTF_16LE
        | ContentType::UTF_16BE
        | ContentType::UTF_32LE
        | ContentType::UTF_32BE => return false,
        _ => {}
    }

    // content_inspector only scans its own (smaller) window for zero bytes
    if probe.contains(&0) {
        return true;
    }

    let non_printable = probe.iter().filter(|&&b| is_non_printable(b)).count();
    (non_printable as f64 / probe.len() as f64) > threshold
}

/// ASCII control bytes other than TAB, LF and CR. Bytes >= 0x80 belong to
/// multibyte sequences of the encodings we convert and are not counted.
#[inline]
fn is_non_printable(b: u8) -> bool {
    (b < 0x20 && !matches!(b, b'\t' | b'\n' | b'\r')) || b == 0x7F
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_text() {
        assert!(!classify(b""));
    }

    #[test]
    fn test_nul_byte_is_binary() {
        assert!(classify(b"abc\x00def"));
    }

    #[test]
    fn test_nul_beyond_content_inspector_window() {
        let mut buf = vec![b'a'; 2000];
        buf.push(0);
        assert!(classify(&buf));
    }

    #[test]
    fn test_nul_beyond_probe_window_is_not_seen() {
        let mut buf = vec![b'a'; PROBE_WINDOW + 10];
        buf.push(0);
        assert!(!classify(&buf));
    }

    #[test]
    fn test_png_magic_is_binary() {
        let png = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
        assert!(classify(&png));
    }

    #[test]
    fn test_pdf_magic_is_binary() {
        // Printable ASCII, but content_inspector's magic-number verdict wins.
        assert!(classify(b"%PDF-1.4\n% plain text notes\n"));
        assert!(!classify(b"// %PDF-1.4 in a comment\n"));
    }

    #[test]
    fn test_control_ratio_threshold() {
        // 4 of 10 bytes are control characters: 40% > 30%
        assert!(classify(b"\x01\x02\x03\x04abcdef"));
        // 2 of 10: 20%
        assert!(!classify(b"\x01\x02abcdefgh"));
        // Custom threshold
        assert!(classify_with(b"\x01\x02abcdefgh", 4096, 0.1));
    }

    #[test]
    fn test_tabs_and_newlines_are_printable() {
        assert!(!classify(b"\t\t\r\n\r\n\t\n"));
    }

    #[test]
    fn test_cjk_legacy_bytes_are_text() {
        let gb = encoding_rs::GB18030.encode("中文注释，没有任何ASCII之外的噪音").0;
        assert!(!classify(&gb));
    }

    #[test]
    fn test_wide_bom_is_not_binary() {
        // "A" in UTF-16LE contains a NUL byte but is announced by the BOM.
        assert!(!classify(b"\xFF\xFEA\x00"));
        assert!(!classify(b"\xFF\xFE\x00\x00A\x00\x00\x00"));
    }
}
