// src/config/target.rs

use crate::core_types::TargetSpec;
use crate::errors::ConfigError;
use encoding_rs::Encoding;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Spellings accepted for the target that the WHATWG label table does not know.
static TARGET_ALIASES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();
    for bom in [
        "utf8bom",
        "utf-8-bom",
        "utf8-bom",
        "utf8-with-bom",
        "utf-8-with-bom",
        "utf-8withbom",
        "utf8-sig",
        "utf-8-sig",
    ] {
        m.insert(bom, "utf-8-sig");
    }
    m.insert("utf8", "utf-8");
    m.insert("utf-8", "utf-8");
    m.insert("cp936", "gbk");
    for sjis in ["cp932", "sjis", "shift-jis", "shiftjis"] {
        m.insert(sjis, "shift_jis");
    }
    m
});

/// Resolves a user-supplied target name into a [`TargetSpec`].
///
/// Names are case-insensitive. Aliases are applied first, then the WHATWG
/// label lookup. Encodings that cannot be produced (UTF-16, `replacement`)
/// are rejected.
///
/// # Examples
/// ```
/// use enconv::config::resolve_target;
/// use enconv::core_types::BomPolicy;
///
/// assert_eq!(resolve_target("UTF8-BOM").unwrap().bom_policy(), BomPolicy::Require);
/// assert_eq!(resolve_target("cp936").unwrap().name(), "gbk");
/// assert!(resolve_target("utf-16le").is_err());
/// ```
pub fn resolve_target(name: &str) -> Result<TargetSpec, ConfigError> {
    let key = name.trim().to_ascii_lowercase();
    let canonical = TARGET_ALIASES.get(key.as_str()).copied().unwrap_or(key.as_str());

    match canonical {
        "utf-8-sig" => Ok(TargetSpec::utf8_sig()),
        "utf-8" => Ok(TargetSpec::utf8()),
        label => {
            let encoding = Encoding::for_label(label.as_bytes())
                .ok_or_else(|| ConfigError::UnknownEncoding(name.to_string()))?;
            if encoding == encoding_rs::UTF_8 {
                return Ok(TargetSpec::utf8());
            }
            if encoding.output_encoding() != encoding {
                return Err(ConfigError::UnsupportedTarget {
                    name: name.to_string(),
                    reason: "only byte-oriented encodings can be written".to_string(),
                });
            }
            Ok(TargetSpec::legacy(encoding))
        }
    }
}

/// Resolves the `--assume-encoding` name into a source encoding.
///
/// Uses the same alias table as the target, so `cp936` and `sjis` work
/// here too. `utf-8-sig` means plain UTF-8 since the source has no BOM.
///
/// ```
/// use enconv::config::resolve_source_encoding;
///
/// assert_eq!(resolve_source_encoding("cp936").unwrap(), encoding_rs::GBK);
/// assert!(resolve_source_encoding("replacement").is_err());
/// ```
pub fn resolve_source_encoding(name: &str) -> Result<&'static Encoding, ConfigError> {
    let key = name.trim().to_ascii_lowercase();
    let canonical = match TARGET_ALIASES.get(key.as_str()).copied() {
        Some("utf-8-sig") => "utf-8",
        Some(alias) => alias,
        None => key.as_str(),
    };
    let invalid = |reason: &str| ConfigError::InvalidValue {
        option: "--assume-encoding".to_string(),
        reason: format!("{} '{}'", reason, name),
    };

    match Encoding::for_label(canonical.as_bytes()) {
        Some(encoding) if encoding == encoding_rs::REPLACEMENT => {
            Err(invalid("cannot decode text with"))
        }
        Some(encoding) => Ok(encoding),
        None => Err(invalid("unknown encoding")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::BomPolicy;

    #[test]
    fn test_bom_aliases() {
        for name in ["utf8bom", "utf-8-with-bom", "utf-8withbom", "utf8-sig", "UTF-8-SIG"] {
            let t = resolve_target(name).unwrap();
            assert_eq!(t.name(), "utf-8-sig", "{}", name);
            assert_eq!(t.bom_policy(), BomPolicy::Require);
        }
    }

    #[test]
    fn test_plain_utf8() {
        for name in ["utf8", "utf-8", "unicode-1-1-utf-8"] {
            let t = resolve_target(name).unwrap();
            assert_eq!(t.name(), "utf-8");
            assert_eq!(t.bom_policy(), BomPolicy::Forbid);
        }
    }

    #[test]
    fn test_legacy_aliases() {
        assert_eq!(resolve_target("cp936").unwrap().encoding(), encoding_rs::GBK);
        for name in ["cp932", "sjis", "Shift-JIS", "shiftjis", "shift_jis"] {
            assert_eq!(
                resolve_target(name).unwrap().encoding(),
                encoding_rs::SHIFT_JIS,
                "{}",
                name
            );
        }
    }

    #[test]
    fn test_whatwg_labels() {
        assert_eq!(resolve_target("gb18030").unwrap().name(), "gb18030");
        assert_eq!(resolve_target("big5").unwrap().bom_policy(), BomPolicy::Ignore);
        assert_eq!(resolve_target("latin1").unwrap().name(), "windows-1252");
    }

    #[test]
    fn test_source_encoding_names() {
        assert_eq!(resolve_source_encoding("GB18030"), Ok(encoding_rs::GB18030));
        assert_eq!(resolve_source_encoding("sjis"), Ok(encoding_rs::SHIFT_JIS));
        assert_eq!(resolve_source_encoding("utf8-bom"), Ok(encoding_rs::UTF_8));
        assert!(matches!(
            resolve_source_encoding("klingon"),
            Err(ConfigError::InvalidValue { ref option, .. }) if option == "--assume-encoding"
        ));
    }

    #[test]
    fn test_rejected_targets() {
        assert_eq!(
            resolve_target("klingon"),
            Err(ConfigError::UnknownEncoding("klingon".to_string()))
        );
        assert!(matches!(
            resolve_target("utf-16be"),
            Err(ConfigError::UnsupportedTarget { .. })
        ));
        assert!(matches!(
            resolve_target("iso-2022-kr"),
            Err(ConfigError::UnsupportedTarget { .. })
        ));
    }
}
