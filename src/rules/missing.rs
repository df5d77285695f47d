//! Missing translation key detection rule.
//!
//! Detects keys referenced by lookup calls but absent from the reference
//! locale's definitions.

use std::collections::HashSet;

use crate::core::UsedKeySet;

/// Check for keys used in code but not defined.
///
/// Returns the missing keys sorted lexicographically.
pub fn check_missing_keys(defined_keys: &HashSet<String>, used_keys: &UsedKeySet) -> Vec<String> {
    let mut missing: Vec<String> = used_keys.difference(defined_keys).cloned().collect();
    missing.sort();
    missing
}
