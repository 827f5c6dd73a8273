// src/filtering/size.rs

use crate::config::DiscoveryConfig;

/// `true` when a file of `len` bytes is within `--max-size` (inclusive).
///
/// ```
/// use enconv::config::Config;
/// use enconv::filtering::within_size_limit;
///
/// let mut config = Config::new_for_test().discovery;
/// assert!(within_size_limit(u64::MAX, &config));
/// config.max_size = Some(1000);
/// assert!(within_size_limit(1000, &config));
/// assert!(!within_size_limit(1001, &config));
/// ```
pub fn within_size_limit(len: u64, config: &DiscoveryConfig) -> bool {
    config.max_size.map_or(true, |max| len <= max)
}
