// src/discovery/walker.rs

use crate::config::path_resolve::ResolvedInput;
use crate::config::DiscoveryConfig;
use glob::Pattern;
use ignore::WalkBuilder;
use log::{debug, warn};

/// Configures and builds a sequential, name-sorted `ignore::Walk`.
pub(super) fn build_walker(config: &DiscoveryConfig, resolved: &ResolvedInput) -> ignore::Walk {
    let mut walker_builder = WalkBuilder::new(&resolved.path);

    if config.use_gitignore {
        walker_builder.standard_filters(true);
        debug!("Configuring WalkBuilder: standard_filters enabled.");
    } else {
        walker_builder.standard_filters(false);
        debug!("Configuring WalkBuilder: standard_filters disabled (gitignore usage off).");
    }
    // standard_filters() toggles hidden-file filtering as well, so this comes after it.
    walker_builder.hidden(!config.include_hidden);
    // Honour .gitignore files even outside a git checkout.
    walker_builder.require_git(false);
    walker_builder.sort_by_file_name(|a, b| a.cmp(b));

    if !config.recursive {
        walker_builder.max_depth(Some(1));
        debug!("Recursion disabled (max depth: 1).");
    }

    if let Some(ignore_patterns) = &config.ignore_patterns {
        let custom_ignore_globs: Vec<Pattern> = ignore_patterns
            .iter()
            .filter_map(|p| match Pattern::new(p) {
                Ok(glob) => Some(glob),
                Err(e) => {
                    warn!("Invalid ignore glob pattern '{}': {}", p, e);
                    None
                }
            })
            .collect();

        if !custom_ignore_globs.is_empty() {
            debug!(
                "Adding custom filter_entry for {} patterns.",
                custom_ignore_globs.len()
            );
            let root = resolved.path.clone();
            walker_builder.filter_entry(move |entry| {
                let path = entry.path();
                let candidate = path.strip_prefix(&root).unwrap_or(path);
                let skip = custom_ignore_globs
                    .iter()
                    .any(|glob| glob.matches_path(candidate));
                if skip {
                    debug!("Skipping {:?}: matches an --ignore glob", candidate);
                }
                !skip
            });
        }
    }

    walker_builder.build()
}
