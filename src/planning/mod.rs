//! Turns a [`DetectionResult`] and a [`TargetSpec`] into a [`ConversionAction`].
//!
//! The planner is pure: it never touches the filesystem. When it decides to
//! convert, the full output payload is produced and checked here so that the
//! writer only has to put bytes on disk.

use crate::codec::{self, ErrorMode};
use crate::constants::{DEFAULT_MIN_CONFIDENCE, UTF8_BOM};
use crate::core_types::{
    encoding_display_name, BomPolicy, BomType, ConversionAction, ConvertReason, DetectionResult,
    TargetSpec,
};
use crate::errors::FileCondition;
use encoding_rs::Encoding;
use log::debug;

/// Knobs that influence planning decisions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanPolicy {
    /// Below this detector confidence a file is skipped (unless `force`).
    pub min_confidence: f32,
    /// Convert unknown and low-confidence files anyway.
    pub force: bool,
    /// How malformed input is handled when decoding.
    pub errors: ErrorMode,
    /// Source encoding tried when detection finds none.
    pub assume_encoding: Option<&'static Encoding>,
}

impl Default for PlanPolicy {
    fn default() -> Self {
        Self {
            min_confidence: DEFAULT_MIN_CONFIDENCE,
            force: false,
            errors: ErrorMode::Strict,
            assume_encoding: None,
        }
    }
}

/// Decides what to do with one file.
///
/// Rules are evaluated top-down and the first one that matches wins:
/// binary, empty, wide BOM, UTF-8 BOM against the target's BOM policy,
/// unknown encoding (unless `assume_encoding` or `force` supplies one),
/// already in target form, low confidence, re-encode.
///
/// A BOM-less UTF-8 target never receives text that starts with U+FEFF, as
/// the next run would read that character back as a BOM.
///
/// # Examples
/// ```
/// use enconv::core_types::{ActionKind, TargetSpec};
/// use enconv::detection::{detect, StrictDecodeChain};
/// use enconv::planning::{plan, PlanPolicy};
/// use std::path::Path;
///
/// let bytes = b"int x;\n";
/// let detection = detect(Path::new("a.h"), bytes, &StrictDecodeChain::default());
/// let action = plan(&detection, bytes, &TargetSpec::utf8_sig(), &PlanPolicy::default());
/// assert_eq!(action.kind(), ActionKind::Convert);
/// assert_eq!(action.payload(), Some(&b"\xEF\xBB\xBFint x;\n"[..]));
/// ```
pub fn plan(
    detection: &DetectionResult,
    bytes: &[u8],
    target: &TargetSpec,
    policy: &PlanPolicy,
) -> ConversionAction {
    if detection.is_binary {
        return ConversionAction::Skip(FileCondition::BinarySkip);
    }
    if bytes.is_empty() {
        return ConversionAction::Skip(FileCondition::EmptyFileSkip);
    }
    if detection.bom.is_wide() {
        return ConversionAction::Unsupported(FileCondition::WideBomUnsupported {
            bom: detection.bom.as_str(),
        });
    }

    let body = &bytes[detection.bom.len()..];

    if detection.bom == BomType::Utf8Sig {
        match target.bom_policy() {
            BomPolicy::Require => return ConversionAction::Skip(FileCondition::AlreadyTarget),
            BomPolicy::Forbid if body.starts_with(UTF8_BOM) => {
                return ConversionAction::Unsupported(FileCondition::LeadingFeffInText)
            }
            BomPolicy::Forbid => {
                return ConversionAction::Convert {
                    reason: ConvertReason::StripBom,
                    payload: body.to_vec(),
                }
            }
            // Legacy targets: decode the body as UTF-8 and re-encode below.
            BomPolicy::Ignore => {}
        }
    }

    let source = match detection.encoding {
        Some(encoding) => {
            if satisfies_target(encoding, detection.bom, body, target) {
                return ConversionAction::Skip(FileCondition::AlreadyTarget);
            }
            if detection.confidence < policy.min_confidence && !policy.force {
                return ConversionAction::Skip(FileCondition::LowConfidenceSkip {
                    confidence: detection.confidence,
                    min_confidence: policy.min_confidence,
                });
            }
            encoding
        }
        None => match policy.assume_encoding {
            // A failing decode under the assumed encoding ends as DecodeFailure below.
            Some(assumed) => {
                debug!(
                    "{}: unknown encoding, assuming {}",
                    detection.path.display(),
                    assumed.name()
                );
                assumed
            }
            None if policy.force => {
                debug!(
                    "{}: unknown encoding forced as utf-8 ({:?} errors)",
                    detection.path.display(),
                    policy.errors
                );
                encoding_rs::UTF_8
            }
            None => return ConversionAction::Unsupported(FileCondition::UnknownEncoding),
        },
    };

    reencode(source, bytes, body, target, policy.errors)
}

/// Whether bytes detected as `encoding` are already what `target` asks for.
fn satisfies_target(
    encoding: &'static Encoding,
    bom: BomType,
    body: &[u8],
    target: &TargetSpec,
) -> bool {
    match target.bom_policy() {
        BomPolicy::Require => encoding == encoding_rs::UTF_8 && bom == BomType::Utf8Sig,
        BomPolicy::Forbid => encoding == encoding_rs::UTF_8 && bom == BomType::None,
        BomPolicy::Ignore => {
            if bom != BomType::None {
                return false;
            }
            if encoding == target.encoding() {
                return true;
            }
            // Legacy encodings overlap a lot (a Big5 file often strictly
            // decodes as GB18030 too). Leave such files alone.
            encoding != encoding_rs::UTF_8
                && target
                    .encoding()
                    .decode_without_bom_handling_and_without_replacement(body)
                    .is_some()
        }
    }
}

fn reencode(
    source: &'static Encoding,
    original: &[u8],
    body: &[u8],
    target: &TargetSpec,
    errors: ErrorMode,
) -> ConversionAction {
    let from = encoding_display_name(source);

    let text = match codec::decode(source, body, errors) {
        Ok(text) => text,
        Err(e) => {
            return ConversionAction::Error(FileCondition::DecodeFailure {
                encoding: from,
                detail: e.to_string(),
            })
        }
    };

    let payload = match codec::encode(&text, target)
        .and_then(|payload| codec::verify_round_trip(&text, &payload, target).map(|()| payload))
    {
        Ok(payload) => payload,
        Err(e) => {
            return ConversionAction::Error(FileCondition::EncodeFailure {
                encoding: target.name().to_string(),
                detail: e.to_string(),
            })
        }
    };

    if target.bom_policy() == BomPolicy::Forbid && payload.starts_with(UTF8_BOM) {
        return ConversionAction::Unsupported(FileCondition::LeadingFeffInText);
    }

    if payload == original {
        return ConversionAction::Skip(FileCondition::AlreadyTarget);
    }

    ConversionAction::Convert {
        reason: ConvertReason::Reencode {
            from,
            to: target.name().to_string(),
        },
        payload,
    }
}
