//! Crash-safe replacement of a file's content.
//!
//! The new bytes always go to a temporary sibling first and reach the real
//! path only through a rename, so a reader (or a crash) sees either the old
//! content or the new one, never a mix.

use crate::constants::{BACKUP_SUFFIX, TEMP_FILE_PREFIX};
use log::debug;
use std::ffi::OsString;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

/// Failure of [`commit`]. In both cases `path` still holds its original bytes.
#[derive(Error, Debug)]
pub enum CommitError {
    #[error("{0}")]
    Backup(#[source] io::Error),
    #[error("{0}")]
    Write(#[source] io::Error),
}

/// Sibling path used for the backup of `path` (`main.cpp` -> `main.cpp.bak`).
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(BACKUP_SUFFIX);
    PathBuf::from(name)
}

/// Atomically replaces the content of `path` with `payload`.
///
/// With `make_backup`, the original bytes are first copied to
/// [`backup_path`] unless that file already exists. The original file's
/// permissions are carried over to the new content.
#[tracing::instrument(level = "debug", skip(payload), fields(bytes = payload.len()))]
pub fn commit(path: &Path, payload: &[u8], make_backup: bool) -> Result<(), CommitError> {
    let dir = parent_dir(path);

    if make_backup {
        write_backup(path, dir).map_err(CommitError::Backup)?;
    }

    let mut tmp = new_temp(dir).map_err(CommitError::Write)?;
    tmp.write_all(payload).map_err(CommitError::Write)?;
    tmp.as_file().sync_all().map_err(CommitError::Write)?;
    if let Ok(metadata) = fs::metadata(path) {
        fs::set_permissions(tmp.path(), metadata.permissions()).map_err(CommitError::Write)?;
    }

    tmp.persist(path).map_err(|e| CommitError::Write(e.error))?;
    debug!("Replaced {}", path.display());
    Ok(())
}

fn write_backup(path: &Path, dir: &Path) -> io::Result<()> {
    let backup = backup_path(path);
    if fs::symlink_metadata(&backup).is_ok() {
        debug!("Backup {} exists, keeping it", backup.display());
        return Ok(());
    }

    let original = fs::read(path)?;
    let mut tmp = new_temp(dir)?;
    tmp.write_all(&original)?;
    tmp.as_file().sync_all()?;

    match tmp.persist_noclobber(&backup) {
        Ok(_) => {
            debug!("Wrote backup {}", backup.display());
            Ok(())
        }
        // Someone else created it in the meantime; the existing copy wins.
        Err(e) if e.error.kind() == io::ErrorKind::AlreadyExists => Ok(()),
        Err(e) => Err(e.error),
    }
}

fn new_temp(dir: &Path) -> io::Result<NamedTempFile> {
    tempfile::Builder::new()
        .prefix(TEMP_FILE_PREFIX)
        .suffix(".tmp")
        .tempfile_in(dir)
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_commit_replaces_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.cpp");
        fs::write(&path, b"old").unwrap();

        commit(&path, b"new", false).unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"new");
        assert_eq!(entries(dir.path()), vec!["a.cpp"]);
    }

    #[test]
    fn test_backup_written_once() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.cpp");
        fs::write(&path, b"v1").unwrap();

        commit(&path, b"v2", true).unwrap();
        assert_eq!(fs::read(backup_path(&path)).unwrap(), b"v1");

        commit(&path, b"v3", true).unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"v3");
        assert_eq!(fs::read(backup_path(&path)).unwrap(), b"v1");
        assert_eq!(entries(dir.path()), vec!["a.cpp", "a.cpp.bak"]);
    }

    #[test]
    fn test_backup_failure_leaves_nothing_behind() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.cpp");

        let err = commit(&path, b"new", true).unwrap_err();

        assert!(matches!(err, CommitError::Backup(_)));
        assert!(entries(dir.path()).is_empty());
    }

    #[test]
    fn test_write_failure_in_missing_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("a.cpp");

        let err = commit(&path, b"new", false).unwrap_err();

        assert!(matches!(err, CommitError::Write(_)));
        assert!(entries(dir.path()).is_empty());
    }

    #[test]
    fn test_backup_path_appends_suffix() {
        assert_eq!(
            backup_path(Path::new("src/main.cpp")),
            PathBuf::from("src/main.cpp.bak")
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_permissions_are_preserved() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let path = dir.path().join("a.sh");
        fs::write(&path, b"old").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o751)).unwrap();

        commit(&path, b"new", false).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o751);
    }

    /// Makes `dir` read-only. Returns false where permissions are not
    /// enforced (e.g. running as root), after restoring the mode.
    #[cfg(unix)]
    fn make_read_only(dir: &Path) -> bool {
        use std::os::unix::fs::PermissionsExt;

        fs::set_permissions(dir, fs::Permissions::from_mode(0o555)).unwrap();
        let check = dir.join(".write-check");
        if fs::File::create(&check).is_ok() {
            fs::remove_file(&check).unwrap();
            fs::set_permissions(dir, fs::Permissions::from_mode(0o755)).unwrap();
            return false;
        }
        true
    }

    #[cfg(unix)]
    #[test]
    fn test_write_failure_leaves_original_intact() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let path = dir.path().join("a.cpp");
        fs::write(&path, b"old").unwrap();
        if !make_read_only(dir.path()) {
            return;
        }

        let result = commit(&path, b"new", false);
        let names = entries(dir.path());
        fs::set_permissions(dir.path(), fs::Permissions::from_mode(0o755)).unwrap();

        assert!(matches!(result, Err(CommitError::Write(_))));
        assert_eq!(fs::read(&path).unwrap(), b"old");
        assert_eq!(names, vec!["a.cpp"]);
    }
}
