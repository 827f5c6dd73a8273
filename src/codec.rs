//! Decoding with a configurable error mode, and encoding to a [`TargetSpec`].

use crate::constants::UTF8_BOM;
use crate::core_types::{encoding_display_name, BomPolicy, TargetSpec};
use encoding_rs::{DecoderResult, Encoding};
use std::borrow::Cow;
use thiserror::Error;

/// How malformed input is handled while decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ErrorMode {
    /// Fail on the first malformed sequence.
    #[default]
    Strict,
    /// Drop malformed sequences.
    Ignore,
    /// Replace malformed sequences with U+FFFD.
    Replace,
}

/// Codec failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("malformed {encoding} byte sequence")]
    Malformed { encoding: String },
    #[error("text contains characters not representable in {encoding}")]
    Unmappable { encoding: String },
    #[error("re-decoding the {encoding} output did not reproduce the text")]
    RoundTrip { encoding: String },
}

/// Decodes `bytes` (without BOM handling) from `encoding`.
///
/// # Examples
/// ```
/// use enconv::codec::{decode, ErrorMode};
///
/// let text = decode(encoding_rs::GB18030, b"\xd6\xd0\xce\xc4", ErrorMode::Strict).unwrap();
/// assert_eq!(text, "中文");
/// assert!(decode(encoding_rs::UTF_8, b"a\xffb", ErrorMode::Strict).is_err());
/// assert_eq!(decode(encoding_rs::UTF_8, b"a\xffb", ErrorMode::Ignore).unwrap(), "ab");
/// assert_eq!(decode(encoding_rs::UTF_8, b"a\xffb", ErrorMode::Replace).unwrap(), "a\u{FFFD}b");
/// ```
pub fn decode<'a>(
    encoding: &'static Encoding,
    bytes: &'a [u8],
    mode: ErrorMode,
) -> Result<Cow<'a, str>, CodecError> {
    match mode {
        ErrorMode::Strict => encoding
            .decode_without_bom_handling_and_without_replacement(bytes)
            .ok_or_else(|| CodecError::Malformed {
                encoding: encoding_display_name(encoding),
            }),
        ErrorMode::Replace => Ok(encoding.decode_without_bom_handling(bytes).0),
        ErrorMode::Ignore => Ok(Cow::Owned(decode_ignoring_malformed(encoding, bytes))),
    }
}

fn decode_ignoring_malformed(encoding: &'static Encoding, bytes: &[u8]) -> String {
    let mut decoder = encoding.new_decoder_without_bom_handling();
    let capacity = decoder
        .max_utf8_buffer_length_without_replacement(bytes.len())
        .unwrap_or(bytes.len().saturating_mul(3));
    let mut out = String::with_capacity(capacity);
    let mut input = bytes;
    loop {
        let (result, read) = decoder.decode_to_string_without_replacement(input, &mut out, true);
        input = &input[read..];
        match result {
            DecoderResult::InputEmpty => break,
            DecoderResult::OutputFull => out.reserve(input.len().saturating_mul(3) + 16),
            DecoderResult::Malformed(_, _) => continue,
        }
    }
    out
}

/// Encodes `text` as the target wants it, BOM included when required.
///
/// Characters the target cannot represent are an error, never an HTML
/// numeric character reference.
pub fn encode(text: &str, target: &TargetSpec) -> Result<Vec<u8>, CodecError> {
    match target.bom_policy() {
        BomPolicy::Require => {
            let mut out = Vec::with_capacity(UTF8_BOM.len() + text.len());
            out.extend_from_slice(UTF8_BOM);
            out.extend_from_slice(text.as_bytes());
            Ok(out)
        }
        BomPolicy::Forbid => Ok(text.as_bytes().to_vec()),
        BomPolicy::Ignore => {
            let (bytes, _, unmappable) = target.encoding().encode(text);
            if unmappable {
                return Err(CodecError::Unmappable {
                    encoding: target.name().to_string(),
                });
            }
            Ok(bytes.into_owned())
        }
    }
}

/// Checks that `payload` decodes back to exactly `text` under the target.
pub fn verify_round_trip(text: &str, payload: &[u8], target: &TargetSpec) -> Result<(), CodecError> {
    let body = match target.bom_policy() {
        BomPolicy::Require => payload.strip_prefix(UTF8_BOM).unwrap_or(payload),
        _ => payload,
    };
    let decoded = target
        .encoding()
        .decode_without_bom_handling_and_without_replacement(body);
    match decoded {
        Some(decoded) if decoded == text => Ok(()),
        _ => Err(CodecError::RoundTrip {
            encoding: target.name().to_string(),
        }),
    }
}
