// src/output/summary.rs

use crate::constants::SUMMARY_HEADER;
use crate::output::Counts;
use std::io::{self, Write};

/// Writes the summary block with the per-outcome counts.
pub fn write_summary(writer: &mut dyn Write, counts: &Counts, dry_run: bool) -> io::Result<()> {
    writeln!(writer, "{}", SUMMARY_HEADER)?;
    writeln!(writer, "  scanned:       {}", counts.scanned)?;
    writeln!(writer, "  skipped:       {}", counts.skipped)?;
    writeln!(writer, "  unsupported:   {}", counts.unsupported)?;
    if dry_run {
        writeln!(writer, "  would convert: {}", counts.would_convert)?;
    } else {
        writeln!(writer, "  converted:     {}", counts.converted)?;
    }
    writeln!(writer, "  errors:        {}", counts.errors)?;
    if dry_run {
        writeln!(writer, "Dry run: no files were modified.")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_real_run() -> io::Result<()> {
        let counts = Counts {
            scanned: 3,
            skipped: 1,
            unsupported: 0,
            would_convert: 0,
            converted: 2,
            errors: 0,
        };
        let mut out = Vec::new();
        write_summary(&mut out, &counts, false)?;
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "[SUMMARY]\n  scanned:       3\n  skipped:       1\n  unsupported:   0\n  converted:     2\n  errors:        0\n"
        );
        Ok(())
    }

    #[test]
    fn test_summary_dry_run() -> io::Result<()> {
        let counts = Counts {
            scanned: 1,
            would_convert: 1,
            ..Counts::default()
        };
        let mut out = Vec::new();
        write_summary(&mut out, &counts, true)?;
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("  would convert: 1\n"));
        assert!(!text.contains("converted:"));
        assert!(text.ends_with("Dry run: no files were modified.\n"));
        Ok(())
    }
}
