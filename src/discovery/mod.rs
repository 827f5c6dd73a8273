//! Discovers candidate files lazily, in a stable (name-sorted) order.
use crate::config::path_resolve::ResolvedInput;
use crate::config::DiscoveryConfig;
use crate::core_types::FileInfo;

mod entry_processor;
mod walker;

use entry_processor::process_direntry;
use walker::build_walker;

/// Walks the input according to `config` and yields the files that pass
/// every filter. File content is not read at this stage.
///
/// The walk is sequential and lazy: nothing beyond the next directory entry
/// is touched until the iterator is advanced, and entries come out sorted
/// by file name within each directory.
///
/// # Examples
///
/// ```
/// use enconv::config::{resolve_input, Config};
/// use enconv::discovery::discover_files;
/// use std::fs;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let dir = tempfile::tempdir()?;
/// fs::write(dir.path().join("b.cpp"), "int b;")?;
/// fs::write(dir.path().join("a.h"), "int a;")?;
/// fs::write(dir.path().join("notes.txt"), "skip me")?;
///
/// let mut config = Config::new_for_test().discovery;
/// config.extensions = Some(vec!["h".into(), "cpp".into()]);
/// let resolved = resolve_input(dir.path().to_str().unwrap())?;
///
/// let names: Vec<_> = discover_files(&config, &resolved)
///     .map(|f| f.relative_path.display().to_string())
///     .collect();
/// assert_eq!(names, ["a.h", "b.cpp"]);
/// # Ok(())
/// # }
/// ```
pub fn discover_files(
    config: &DiscoveryConfig,
    resolved: &ResolvedInput,
) -> impl Iterator<Item = FileInfo> {
    let walker = build_walker(config, resolved);
    let config = config.clone();
    let resolved = resolved.clone();
    walker.filter_map(move |entry| process_direntry(entry, &config, &resolved))
}
