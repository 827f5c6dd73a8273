// src/detection/bom.rs

use crate::core_types::BomType;

// Longest signatures first: UTF-32LE starts with the UTF-16LE mark.
const SIGNATURES: &[(&[u8], BomType)] = &[
    (b"\xFF\xFE\x00\x00", BomType::Utf32Le),
    (b"\x00\x00\xFE\xFF", BomType::Utf32Be),
    (b"\xEF\xBB\xBF", BomType::Utf8Sig),
    (b"\xFF\xFE", BomType::Utf16Le),
    (b"\xFE\xFF", BomType::Utf16Be),
];

/// Detects a byte-order mark at the start of `bytes`.
///
/// # Examples
/// ```
/// use enconv::core_types::BomType;
/// use enconv::detection::sniff_bom;
///
/// assert_eq!(sniff_bom(b"\xEF\xBB\xBFint x;"), BomType::Utf8Sig);
/// assert_eq!(sniff_bom(b"\xFF\xFE\x00\x00"), BomType::Utf32Le);
/// assert_eq!(sniff_bom(b"int x;"), BomType::None);
/// ```
pub fn sniff_bom(bytes: &[u8]) -> BomType {
    SIGNATURES
        .iter()
        .find(|(sig, _)| bytes.starts_with(sig))
        .map(|&(_, bom)| bom)
        .unwrap_or(BomType::None)
}
