//! Byte-level detection: binary classification, BOM sniffing and charset
//! sniffing, combined into a [`DetectionResult`].

use crate::core_types::{BomType, DetectionResult};
use log::debug;
use std::path::Path;

mod binary;
mod bom;
pub mod charset;

pub use binary::{classify, classify_with};
pub use bom::sniff_bom;
pub use charset::{
    CharsetDetector, DetectorKind, Sniff, StatisticalDetector, StrictDecodeChain, TextMetrics,
};

/// Runs the classifier and both sniffers over a complete file buffer.
///
/// Besides the probe-window classification, a NUL byte anywhere in the
/// buffer marks it binary unless a wide BOM announces UTF-16/UTF-32.
/// A UTF-8 BOM is trusted over whatever the detector says.
///
/// # Examples
/// ```
/// use enconv::detection::{detect, StrictDecodeChain};
/// use std::path::Path;
///
/// let result = detect(Path::new("a.cpp"), b"int x;\n", &StrictDecodeChain::default());
/// assert!(!result.is_binary);
/// assert_eq!(result.encoding_name().as_deref(), Some("utf-8"));
/// assert_eq!(result.confidence, 1.0);
/// ```
pub fn detect(path: &Path, bytes: &[u8], detector: &dyn CharsetDetector) -> DetectionResult {
    let bom = sniff_bom(bytes);
    let size = bytes.len() as u64;

    let is_binary = classify(bytes) || (!bom.is_wide() && bytes.contains(&0));
    if is_binary {
        return DetectionResult::binary(path.to_path_buf(), size);
    }

    if bom.is_wide() {
        return DetectionResult {
            path: path.to_path_buf(),
            size,
            is_binary: false,
            bom,
            encoding: None,
            confidence: 0.0,
        };
    }

    let body = &bytes[bom.len()..];
    let sniff = detector.sniff(body, bom.is_some());

    let (encoding, confidence) = if bom == BomType::Utf8Sig {
        if sniff.encoding != Some(encoding_rs::UTF_8) {
            debug!(
                "{}: UTF-8 BOM overrides {} guess {:?}",
                path.display(),
                detector.name(),
                sniff.encoding.map(|e| e.name())
            );
        }
        (Some(encoding_rs::UTF_8), 1.0)
    } else {
        (sniff.encoding, sniff.confidence)
    };

    DetectionResult {
        path: path.to_path_buf(),
        size,
        is_binary: false,
        bom,
        encoding,
        confidence,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strict() -> StrictDecodeChain {
        StrictDecodeChain::default()
    }

    #[test]
    fn test_detect_binary() {
        let r = detect(Path::new("x"), b"abc\x00def", &strict());
        assert!(r.is_binary);
        assert_eq!(r.encoding, None);
    }

    #[test]
    fn test_detect_late_nul_is_binary() {
        let mut buf = vec![b'a'; crate::constants::PROBE_WINDOW + 100];
        buf.push(0);
        let r = detect(Path::new("x"), &buf, &strict());
        assert!(r.is_binary);
    }

    #[test]
    fn test_detect_wide_bom() {
        let r = detect(Path::new("x"), b"\xFF\xFEa\x00b\x00", &strict());
        assert!(!r.is_binary);
        assert_eq!(r.bom, BomType::Utf16Le);
        assert!(r.has_bom());
        assert_eq!(r.encoding, None);
    }

    #[test]
    fn test_detect_utf32le_priority() {
        let r = detect(Path::new("x"), b"\xFF\xFE\x00\x00a\x00\x00\x00", &strict());
        assert_eq!(r.bom, BomType::Utf32Le);
    }

    #[test]
    fn test_utf8_bom_is_trusted() {
        // Body is not valid UTF-8, the BOM still wins.
        let r = detect(Path::new("x"), b"\xEF\xBB\xBF\xD6\xD0", &strict());
        assert_eq!(r.bom, BomType::Utf8Sig);
        assert_eq!(r.encoding, Some(encoding_rs::UTF_8));
        assert_eq!(r.confidence, 1.0);
    }

    #[test]
    fn test_detect_gb18030() {
        let (bytes, _, _) = encoding_rs::GB18030.encode("/* 中文 */\n");
        let r = detect(Path::new("x"), &bytes, &strict());
        assert_eq!(r.encoding_name().as_deref(), Some("gb18030"));
        assert_eq!(r.bom, BomType::None);
    }
}
