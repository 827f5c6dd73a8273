// src/detection/charset/strict.rs

use super::{CharsetDetector, Sniff};
use encoding_rs::Encoding;
use log::trace;

/// Tries each candidate in order and returns the first one that decodes the
/// buffer without a single error.
///
/// UTF-8 goes first since most modern source already is UTF-8, then GB18030
/// as the broadest Simplified-Chinese superset. `gbk` and `cp932` share their
/// decoders with `gb18030` and `shift_jis` and never win on their own.
#[derive(Debug, Clone)]
pub struct StrictDecodeChain {
    candidates: Vec<(&'static str, &'static Encoding)>,
}

impl Default for StrictDecodeChain {
    fn default() -> Self {
        Self {
            candidates: vec![
                ("utf-8", encoding_rs::UTF_8),
                ("gb18030", encoding_rs::GB18030),
                ("gbk", encoding_rs::GBK),
                ("big5", encoding_rs::BIG5),
                ("shift_jis", encoding_rs::SHIFT_JIS),
                ("cp932", encoding_rs::SHIFT_JIS),
            ],
        }
    }
}

impl StrictDecodeChain {
    /// A chain over a custom, ordered candidate list.
    pub fn with_candidates(candidates: Vec<(&'static str, &'static Encoding)>) -> Self {
        Self { candidates }
    }
}

impl CharsetDetector for StrictDecodeChain {
    fn name(&self) -> &'static str {
        "strict"
    }

    fn sniff(&self, bytes: &[u8], _has_bom: bool) -> Sniff {
        for &(label, encoding) in &self.candidates {
            if encoding
                .decode_without_bom_handling_and_without_replacement(bytes)
                .is_some()
            {
                trace!("Strict decode succeeded with {}", label);
                return Sniff {
                    encoding: Some(encoding),
                    confidence: 1.0,
                };
            }
            trace!("Strict decode failed with {}", label);
        }
        Sniff::UNKNOWN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sniff(bytes: &[u8]) -> Sniff {
        StrictDecodeChain::default().sniff(bytes, false)
    }

    #[test]
    fn test_ascii_is_utf8() {
        let s = sniff(b"int main() { return 0; }\n");
        assert_eq!(s.encoding, Some(encoding_rs::UTF_8));
        assert_eq!(s.confidence, 1.0);
    }

    #[test]
    fn test_utf8_chinese() {
        let s = sniff("// 中文注释\n".as_bytes());
        assert_eq!(s.encoding, Some(encoding_rs::UTF_8));
    }

    #[test]
    fn test_gb18030_chinese() {
        let (bytes, _, _) = encoding_rs::GB18030.encode("// 中文注释\nint x;\n");
        let s = sniff(&bytes);
        assert_eq!(s.encoding, Some(encoding_rs::GB18030));
        assert_eq!(s.confidence, 1.0);
    }

    #[test]
    fn test_nothing_decodes() {
        // 0xFF is never a valid byte in any candidate
        let s = sniff(b"\xFF\xFF\xFF");
        assert_eq!(s, Sniff::UNKNOWN);
    }

    #[test]
    fn test_custom_candidates() {
        let chain = StrictDecodeChain::with_candidates(vec![("big5", encoding_rs::BIG5)]);
        let (bytes, _, _) = encoding_rs::BIG5.encode("中文");
        assert_eq!(chain.sniff(&bytes, false).encoding, Some(encoding_rs::BIG5));
        assert_eq!(chain.sniff(b"\xFF", false), Sniff::UNKNOWN);
    }
}
