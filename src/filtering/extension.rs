// src/filtering/extension.rs

use crate::config::DiscoveryConfig;
use std::path::Path;

/// Checks if a path passes the include/exclude extension filters.
///
/// The filtering logic follows these rules in order:
///
/// 1.  **Exclusion Precedence:** If `config.exclude_extensions` is `Some` and contains the
///     file's extension, the function returns `false`.
/// 2.  **Inclusion Requirement:** If `config.extensions` is `Some`, the file must have an
///     extension, and that extension must be present in the include list.
/// 3.  **Default Pass:** Otherwise the function returns `true`.
///
/// The comparison is always case-insensitive.
///
/// # Examples
///
/// ```
/// use enconv::config::Config;
/// use enconv::filtering::passes_extension_filters;
/// use std::path::Path;
///
/// let mut config = Config::new_for_test().discovery;
/// config.extensions = Some(vec!["cpp".to_string(), "h".to_string()]);
/// assert!(passes_extension_filters(Path::new("src/Main.CPP"), &config));
/// assert!(!passes_extension_filters(Path::new("Makefile"), &config));
///
/// config.exclude_extensions = Some(vec!["h".to_string()]);
/// assert!(!passes_extension_filters(Path::new("include/api.h"), &config));
/// ```
pub fn passes_extension_filters(path: &Path, config: &DiscoveryConfig) -> bool {
    let extension = path
        .extension()
        .and_then(|os_str| os_str.to_str())
        .map(|s| s.to_lowercase());

    if let (Some(exclude_exts), Some(ext)) = (&config.exclude_extensions, &extension) {
        if exclude_exts.contains(ext) {
            return false;
        }
    }

    match (&config.extensions, &extension) {
        (Some(include_exts), Some(ext)) => include_exts.contains(ext),
        (Some(_), None) => false,
        (None, _) => true,
    }
}
