// src/filtering/artifact.rs

use crate::constants::{BACKUP_SUFFIX, TEMP_FILE_PREFIX};
use std::path::Path;

/// `true` for files this tool creates itself: `.bak` backups and leftover
/// temporary files from an interrupted write. They are never converted.
pub fn is_conversion_artifact(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    name.to_ascii_lowercase().ends_with(BACKUP_SUFFIX) || name.starts_with(TEMP_FILE_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifacts() {
        assert!(is_conversion_artifact(Path::new("src/main.cpp.bak")));
        assert!(is_conversion_artifact(Path::new("OLD.BAK")));
        assert!(is_conversion_artifact(Path::new("src/.enconv-a1b2c3.tmp")));
        assert!(!is_conversion_artifact(Path::new("src/main.cpp")));
        assert!(!is_conversion_artifact(Path::new("backup.h")));
    }
}
