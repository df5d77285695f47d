//! Unused translation key detection rule.
//!
//! Detects keys defined for a locale but never referenced by a lookup call.

use std::collections::HashSet;

use crate::core::UsedKeySet;

/// Check for unused translation keys.
///
/// # Arguments
/// * `defined_keys` - Keys defined for one locale
/// * `used_keys` - Set of all keys referenced in source code
///
/// # Returns
/// Keys defined but not used, sorted for deterministic output
pub fn check_unused_keys(defined_keys: &HashSet<String>, used_keys: &UsedKeySet) -> Vec<String> {
    let mut unused: Vec<String> = defined_keys.difference(used_keys).cloned().collect();
    unused.sort();
    unused
}
