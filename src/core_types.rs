//! Defines core data structures used throughout the application pipeline.
//!
//! A file travels through these types in order: [`FileInfo`] from discovery,
//! [`DetectionResult`] from the sniffers, [`ConversionAction`] from the
//! planner and finally a [`FileRecord`] for the reporter.

use crate::errors::FileCondition;
use encoding_rs::Encoding;
use std::fmt;
use std::path::PathBuf;

/// Represents a file discovered during the walk. Content is read later.
///
/// # Examples
///
/// ```
/// use enconv::core_types::FileInfo;
/// use std::path::PathBuf;
///
/// let file_info = FileInfo {
///     absolute_path: PathBuf::from("/path/to/project/src/main.cpp"),
///     relative_path: PathBuf::from("src/main.cpp"),
///     size: 123,
/// };
///
/// assert_eq!(file_info.size, 123);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileInfo {
    /// The absolute, canonicalized path to the file on the filesystem.
    pub absolute_path: PathBuf,
    /// The path relative to the scan root, used for display.
    pub relative_path: PathBuf,
    /// The size of the file in bytes, obtained from metadata.
    pub size: u64,
}

/// Byte-order mark found at the start of a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BomType {
    #[default]
    None,
    Utf8Sig,
    Utf16Le,
    Utf16Be,
    Utf32Le,
    Utf32Be,
}

impl BomType {
    /// Length of the signature in bytes.
    pub fn len(self) -> usize {
        match self {
            BomType::None => 0,
            BomType::Utf8Sig => 3,
            BomType::Utf16Le | BomType::Utf16Be => 2,
            BomType::Utf32Le | BomType::Utf32Be => 4,
        }
    }

    /// `true` for the UTF-16 and UTF-32 signatures.
    pub fn is_wide(self) -> bool {
        matches!(
            self,
            BomType::Utf16Le | BomType::Utf16Be | BomType::Utf32Le | BomType::Utf32Be
        )
    }

    pub fn is_some(self) -> bool {
        self != BomType::None
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BomType::None => "none",
            BomType::Utf8Sig => "utf-8-sig",
            BomType::Utf16Le => "utf-16le",
            BomType::Utf16Be => "utf-16be",
            BomType::Utf32Le => "utf-32le",
            BomType::Utf32Be => "utf-32be",
        }
    }
}

impl fmt::Display for BomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the sniffers learned about one file.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectionResult {
    pub path: PathBuf,
    /// Number of bytes inspected (the whole file for text files).
    pub size: u64,
    pub is_binary: bool,
    pub bom: BomType,
    /// Probable source encoding, `None` when nothing decoded the buffer.
    pub encoding: Option<&'static Encoding>,
    /// Certainty in `encoding`, within `[0, 1]`.
    pub confidence: f32,
}

impl DetectionResult {
    /// A result for a file rejected by the binary classifier.
    pub fn binary(path: PathBuf, size: u64) -> Self {
        Self {
            path,
            size,
            is_binary: true,
            bom: BomType::None,
            encoding: None,
            confidence: 0.0,
        }
    }

    pub fn has_bom(&self) -> bool {
        self.bom.is_some()
    }

    /// Lowercase display name of the detected encoding, if any.
    pub fn encoding_name(&self) -> Option<String> {
        self.encoding.map(encoding_display_name)
    }
}

/// Lowercase WHATWG name of an encoding (`utf-8`, `gb18030`, `shift_jis`, ...).
pub fn encoding_display_name(encoding: &'static Encoding) -> String {
    encoding.name().to_ascii_lowercase()
}

/// What the target encoding demands of the BOM.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BomPolicy {
    /// `utf-8-sig`: output starts with `EF BB BF`.
    Require,
    /// `utf-8`: output never starts with a BOM.
    Forbid,
    /// Legacy targets: only the encoding has to match.
    Ignore,
}

/// A resolved target encoding. Build it with [`crate::config::resolve_target`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetSpec {
    name: String,
    encoding: &'static Encoding,
    bom: BomPolicy,
}

impl TargetSpec {
    /// UTF-8 with BOM.
    pub fn utf8_sig() -> Self {
        Self {
            name: "utf-8-sig".to_string(),
            encoding: encoding_rs::UTF_8,
            bom: BomPolicy::Require,
        }
    }

    /// UTF-8 without BOM.
    pub fn utf8() -> Self {
        Self {
            name: "utf-8".to_string(),
            encoding: encoding_rs::UTF_8,
            bom: BomPolicy::Forbid,
        }
    }

    /// A non-UTF-8 target. The caller guarantees the encoding can be produced.
    pub(crate) fn legacy(encoding: &'static Encoding) -> Self {
        Self {
            name: encoding_display_name(encoding),
            encoding,
            bom: BomPolicy::Ignore,
        }
    }

    /// Canonical name after alias resolution.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }

    pub fn bom_policy(&self) -> BomPolicy {
        self.bom
    }
}

impl fmt::Display for TargetSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// The four kinds of planner decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Skip,
    Convert,
    Unsupported,
    Error,
}

impl ActionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ActionKind::Skip => "skip",
            ActionKind::Convert => "convert",
            ActionKind::Unsupported => "unsupported",
            ActionKind::Error => "error",
        }
    }
}

/// Why a `Convert` action was chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertReason {
    /// UTF-8 with BOM to UTF-8 without; the body bytes are kept verbatim.
    StripBom,
    /// Decode from `from`, encode as `to`.
    Reencode { from: String, to: String },
}

impl fmt::Display for ConvertReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertReason::StripBom => f.write_str("strip BOM, keep UTF-8 bytes"),
            ConvertReason::Reencode { from, to } => write!(f, "re-encode {} -> {}", from, to),
        }
    }
}

/// The planner's decision for one file.
///
/// Only `Convert` carries a payload, so "payload iff convert" holds by
/// construction.
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionAction {
    Skip(FileCondition),
    Convert {
        reason: ConvertReason,
        payload: Vec<u8>,
    },
    Unsupported(FileCondition),
    Error(FileCondition),
}

impl ConversionAction {
    pub fn kind(&self) -> ActionKind {
        match self {
            ConversionAction::Skip(_) => ActionKind::Skip,
            ConversionAction::Convert { .. } => ActionKind::Convert,
            ConversionAction::Unsupported(_) => ActionKind::Unsupported,
            ConversionAction::Error(_) => ActionKind::Error,
        }
    }

    pub fn reason(&self) -> String {
        match self {
            ConversionAction::Skip(c)
            | ConversionAction::Unsupported(c)
            | ConversionAction::Error(c) => c.to_string(),
            ConversionAction::Convert { reason, .. } => reason.to_string(),
        }
    }

    pub fn payload(&self) -> Option<&[u8]> {
        match self {
            ConversionAction::Convert { payload, .. } => Some(payload),
            _ => None,
        }
    }
}

/// Final per-file outcome after the (optional) commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Skipped,
    Unsupported,
    /// A `Convert` action during a dry run.
    WouldConvert,
    Converted,
    Failed,
}

impl Outcome {
    /// Tag used in console lines.
    pub fn tag(self) -> &'static str {
        match self {
            Outcome::Skipped => "SKIP",
            Outcome::Unsupported => "UNSUPPORTED",
            Outcome::WouldConvert => "CHANGE",
            Outcome::Converted => "WRITE",
            Outcome::Failed => "ERROR",
        }
    }
}

/// One row of the run report.
#[derive(Debug, Clone, PartialEq)]
pub struct FileRecord {
    pub file: FileInfo,
    pub detection: DetectionResult,
    /// What the planner decided.
    pub action: ActionKind,
    /// What actually happened.
    pub outcome: Outcome,
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bom_lengths_and_width() {
        assert_eq!(BomType::None.len(), 0);
        assert_eq!(BomType::Utf8Sig.len(), 3);
        assert_eq!(BomType::Utf16Be.len(), 2);
        assert_eq!(BomType::Utf32Le.len(), 4);
        assert!(!BomType::Utf8Sig.is_wide());
        assert!(BomType::Utf16Le.is_wide());
        assert!(!BomType::None.is_some());
    }

    #[test]
    fn test_payload_only_on_convert() {
        let skip = ConversionAction::Skip(FileCondition::BinarySkip);
        assert_eq!(skip.kind(), ActionKind::Skip);
        assert!(skip.payload().is_none());

        let convert = ConversionAction::Convert {
            reason: ConvertReason::StripBom,
            payload: b"abc".to_vec(),
        };
        assert_eq!(convert.kind(), ActionKind::Convert);
        assert_eq!(convert.payload(), Some(&b"abc"[..]));
        assert_eq!(convert.reason(), "strip BOM, keep UTF-8 bytes");
    }

    #[test]
    fn test_target_names() {
        assert_eq!(TargetSpec::utf8_sig().name(), "utf-8-sig");
        assert_eq!(TargetSpec::utf8().bom_policy(), BomPolicy::Forbid);
        let gb = TargetSpec::legacy(encoding_rs::GB18030);
        assert_eq!(gb.name(), "gb18030");
        assert_eq!(gb.bom_policy(), BomPolicy::Ignore);
    }
}
