mod common;

use assert_cmd::prelude::*;
use common::{create_file, enconv_cmd, gb18030, UTF8_BOM};
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn is_converted(path: &Path) -> bool {
    fs::read(path).map(|b| b.starts_with(UTF8_BOM)).unwrap_or(false)
}

#[test]
fn test_default_extensions_only() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let gbk = gb18030("// 中文\n");
    create_file(temp.path(), "a.cpp", &gbk)?;
    create_file(temp.path(), "b.HPP", &gbk)?;
    create_file(temp.path(), "c.c", &gbk)?;
    create_file(temp.path(), "notes.txt", &gbk)?;

    enconv_cmd().arg(temp.path()).assert().success();

    assert!(is_converted(&temp.path().join("a.cpp")));
    assert!(is_converted(&temp.path().join("b.HPP")));
    assert_eq!(fs::read(temp.path().join("c.c"))?, gbk);
    assert_eq!(fs::read(temp.path().join("notes.txt"))?, gbk);
    Ok(())
}

#[test]
fn test_custom_extensions_accept_dots_and_commas() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let gbk = gb18030("// 中文\n");
    create_file(temp.path(), "a.c", &gbk)?;
    create_file(temp.path(), "b.txt", &gbk)?;
    create_file(temp.path(), "c.cpp", &gbk)?;

    enconv_cmd()
        .arg(temp.path())
        .args(["-e", ".c,TXT"])
        .assert()
        .success();

    assert!(is_converted(&temp.path().join("a.c")));
    assert!(is_converted(&temp.path().join("b.txt")));
    assert_eq!(fs::read(temp.path().join("c.cpp"))?, gbk);
    Ok(())
}

#[test]
fn test_exclude_extension_wins() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let gbk = gb18030("// 中文\n");
    create_file(temp.path(), "a.h", &gbk)?;
    create_file(temp.path(), "b.cpp", &gbk)?;

    enconv_cmd()
        .arg(temp.path())
        .args(["-x", "cpp"])
        .assert()
        .success();

    assert!(is_converted(&temp.path().join("a.h")));
    assert_eq!(fs::read(temp.path().join("b.cpp"))?, gbk);
    Ok(())
}

#[test]
fn test_gitignore_hidden_and_ignore_globs() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let gbk = gb18030("// 中文\n");
    create_file(temp.path(), ".gitignore", b"build/\n")?;
    create_file(temp.path(), "build/gen.h", &gbk)?;
    create_file(temp.path(), ".cache/x.h", &gbk)?;
    create_file(temp.path(), "third_party/lib.h", &gbk)?;
    create_file(temp.path(), "src/main.cpp", &gbk)?;

    enconv_cmd()
        .arg(temp.path())
        .args(["-i", "third_party/*"])
        .assert()
        .success()
        .stdout(predicate::str::contains("scanned:       1"));

    assert!(is_converted(&temp.path().join("src/main.cpp")));
    assert_eq!(fs::read(temp.path().join("build/gen.h"))?, gbk);
    assert_eq!(fs::read(temp.path().join(".cache/x.h"))?, gbk);
    assert_eq!(fs::read(temp.path().join("third_party/lib.h"))?, gbk);

    // Without gitignore rules and with hidden entries, both come back in.
    enconv_cmd()
        .arg(temp.path())
        .args(["--no-gitignore", "--include-hidden"])
        .assert()
        .success();
    assert!(is_converted(&temp.path().join("build/gen.h")));
    assert!(is_converted(&temp.path().join(".cache/x.h")));
    Ok(())
}

#[test]
fn test_no_recursive() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let gbk = gb18030("// 中文\n");
    create_file(temp.path(), "top.h", &gbk)?;
    create_file(temp.path(), "sub/deep.h", &gbk)?;

    enconv_cmd()
        .arg(temp.path())
        .arg("-n")
        .assert()
        .success();

    assert!(is_converted(&temp.path().join("top.h")));
    assert_eq!(fs::read(temp.path().join("sub/deep.h"))?, gbk);
    Ok(())
}

#[test]
fn test_max_size_skips_large_files() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let small = gb18030("// 中文\n");
    let large = gb18030(&"// 中文注释\n".repeat(200));
    create_file(temp.path(), "small.h", &small)?;
    create_file(temp.path(), "large.h", &large)?;

    enconv_cmd()
        .arg(temp.path())
        .args(["-m", "1k"])
        .assert()
        .success();

    assert!(is_converted(&temp.path().join("small.h")));
    assert_eq!(fs::read(temp.path().join("large.h"))?, large);
    Ok(())
}

#[test]
fn test_single_file_root_ignores_extension_filter() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let file = temp.path().join("README.txt");
    fs::write(&file, gb18030("中文说明\n"))?;

    enconv_cmd()
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("README.txt"));

    assert!(is_converted(&file));
    Ok(())
}

#[test]
fn test_backups_are_never_scanned() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let gbk = gb18030("// 中文\n");
    create_file(temp.path(), "a.h", &gbk)?;

    enconv_cmd()
        .arg(temp.path())
        .args(["-e", "h,bak", "--backup"])
        .assert()
        .success()
        .stdout(predicate::str::contains("scanned:       1"));

    assert_eq!(fs::read(temp.path().join("a.h.bak"))?, gbk);
    Ok(())
}
