// tests/common.rs

use std::fs;
use std::path::Path;
use std::process::Command;

// Helper function to get the binary command
#[allow(dead_code)] // Used by most integration tests, but not all.
pub fn enconv_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("enconv"))
}

/// Encodes `text` as GB18030 (a superset of GBK).
#[allow(dead_code)]
pub fn gb18030(text: &str) -> Vec<u8> {
    encoding_rs::GB18030.encode(text).0.into_owned()
}

/// Writes `content` to `dir/relative_path`, creating parent directories.
#[allow(dead_code)]
pub fn create_file(dir: &Path, relative_path: &str, content: &[u8]) -> std::io::Result<()> {
    let file_path = dir.join(relative_path);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)
}

#[allow(dead_code)]
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// `text` as UTF-8 with a leading BOM.
#[allow(dead_code)]
pub fn with_bom(text: &str) -> Vec<u8> {
    let mut bytes = UTF8_BOM.to_vec();
    bytes.extend_from_slice(text.as_bytes());
    bytes
}
