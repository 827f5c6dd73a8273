// src/detection/charset/statistical.rs

use super::{CharsetDetector, Sniff};
use encoding_rs::Encoding;
use log::trace;

const CHAOS_WEIGHT: f32 = 0.65;
const COHERENCE_WEIGHT: f32 = 0.35;
const BOM_BONUS: f32 = 0.05;

/// Scores every candidate decoding and keeps the most plausible one.
///
/// Each candidate decodes the buffer with replacement. The decoded text is
/// measured by [`TextMetrics`] and scored as
/// `0.65 * (1 - chaos) + 0.35 * coherence`, plus a small bonus when a BOM was
/// present, clamped to `[0, 1]`. Ties keep the earlier candidate.
#[derive(Debug, Clone)]
pub struct StatisticalDetector {
    candidates: Vec<&'static Encoding>,
}

impl Default for StatisticalDetector {
    fn default() -> Self {
        Self {
            candidates: vec![
                encoding_rs::UTF_8,
                encoding_rs::GB18030,
                encoding_rs::BIG5,
                encoding_rs::SHIFT_JIS,
                encoding_rs::EUC_KR,
                encoding_rs::WINDOWS_1252,
            ],
        }
    }
}

impl CharsetDetector for StatisticalDetector {
    fn name(&self) -> &'static str {
        "statistical"
    }

    fn sniff(&self, bytes: &[u8], has_bom: bool) -> Sniff {
        let mut best = Sniff::UNKNOWN;
        for &encoding in &self.candidates {
            let (text, _had_errors) = encoding.decode_without_bom_handling(bytes);
            let metrics = TextMetrics::measure(&text);
            let mut confidence =
                CHAOS_WEIGHT * (1.0 - metrics.chaos) + COHERENCE_WEIGHT * metrics.coherence;
            if has_bom {
                confidence += BOM_BONUS;
            }
            let confidence = confidence.clamp(0.0, 1.0);
            trace!(
                "{}: chaos={:.3} coherence={:.3} confidence={:.3}",
                encoding.name(),
                metrics.chaos,
                metrics.coherence,
                confidence
            );
            if best.encoding.is_none() || confidence > best.confidence {
                best = Sniff {
                    encoding: Some(encoding),
                    confidence,
                };
            }
        }
        best
    }
}

/// Noise and plausibility of a decoded text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMetrics {
    /// Share of suspicious characters among non-whitespace characters, `[0, 1]`.
    pub chaos: f32,
    /// Share of non-ASCII letters that belong to the dominant script, `[0, 1]`.
    pub coherence: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Script {
    Latin,
    Greek,
    Cyrillic,
    Cjk,
    Hangul,
    Other,
}

const SCRIPT_COUNT: usize = 6;

impl Script {
    fn of(ch: char) -> Script {
        match ch as u32 {
            0x00C0..=0x024F | 0x1E00..=0x1EFF => Script::Latin,
            0x0370..=0x03FF => Script::Greek,
            0x0400..=0x04FF => Script::Cyrillic,
            0x3040..=0x30FF
            | 0x31F0..=0x31FF
            | 0x3400..=0x4DBF
            | 0x4E00..=0x9FFF
            | 0xF900..=0xFAFF
            | 0xFF66..=0xFF9F
            | 0x20000..=0x2FFFF => Script::Cjk,
            0x1100..=0x11FF | 0x3130..=0x318F | 0xAC00..=0xD7AF => Script::Hangul,
            _ => Script::Other,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl TextMetrics {
    /// Measures `text`.
    ///
    /// # Examples
    /// ```
    /// use enconv::detection::TextMetrics;
    ///
    /// let clean = TextMetrics::measure("int main() { return 0; }");
    /// assert_eq!(clean.chaos, 0.0);
    /// assert_eq!(clean.coherence, 1.0);
    ///
    /// let noisy = TextMetrics::measure("a\u{FFFD}b\u{0001}");
    /// assert!(noisy.chaos > 0.0);
    /// ```
    pub fn measure(text: &str) -> TextMetrics {
        let mut considered = 0usize;
        let mut suspicious = 0usize;
        let mut letters = 0usize;
        let mut per_script = [0usize; SCRIPT_COUNT];
        let mut switches = 0usize;
        let mut previous: Option<Script> = None;

        for ch in text.chars() {
            if ch.is_whitespace() {
                continue;
            }
            considered += 1;
            if is_suspicious(ch) {
                suspicious += 1;
                continue;
            }
            if !ch.is_ascii() && ch.is_alphabetic() {
                let script = Script::of(ch);
                letters += 1;
                per_script[script.index()] += 1;
                if previous.is_some_and(|p| p != script) {
                    switches += 1;
                }
                previous = Some(script);
            }
        }

        let chaos = if considered == 0 {
            0.0
        } else {
            ((suspicious as f32 + switches as f32 / 2.0) / considered as f32).min(1.0)
        };
        let coherence = if letters == 0 {
            1.0
        } else {
            let dominant = per_script.iter().copied().max().unwrap_or(0);
            dominant as f32 / letters as f32
        };
        TextMetrics { chaos, coherence }
    }
}

fn is_suspicious(ch: char) -> bool {
    ch == '\u{FFFD}'
        || (ch.is_control() && !matches!(ch, '\t' | '\n' | '\r' | '\u{000C}'))
        || ('\u{E000}'..='\u{F8FF}').contains(&ch)
}
