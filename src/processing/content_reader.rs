// src/processing/content_reader.rs

use crate::constants::PROBE_WINDOW;
use crate::detection::classify;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// What reading a candidate file produced.
#[derive(Debug, PartialEq, Eq)]
pub(super) enum FileContent {
    /// The probe window already looked binary; the rest was never read.
    Binary { probed: usize },
    /// The complete file.
    Text(Vec<u8>),
}

/// Reads the probe window, and the rest of the file only if the probe is text.
pub(super) fn read_candidate(path: &Path) -> io::Result<FileContent> {
    let mut file = File::open(path)?;
    let mut buffer = Vec::with_capacity(PROBE_WINDOW);
    (&mut file).take(PROBE_WINDOW as u64).read_to_end(&mut buffer)?;

    if classify(&buffer) {
        return Ok(FileContent::Binary {
            probed: buffer.len(),
        });
    }

    file.read_to_end(&mut buffer)?;
    Ok(FileContent::Text(buffer))
}
