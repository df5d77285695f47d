//! Per-locale usage analysis.
//!
//! Combines the defined keys of every locale with the locale-agnostic set of
//! used keys. Missing keys are only computed for the reference locale.

use crate::{
    core::{AllLocaleAnalysis, LocaleAnalysis, LocaleKeySet, UsedKeySet},
    rules::{missing::check_missing_keys, unused::check_unused_keys},
    utils::percentage,
};

pub fn analyze_usage(
    definitions: &LocaleKeySet,
    used_keys: &UsedKeySet,
    reference_locale: &str,
) -> AllLocaleAnalysis {
    definitions
        .iter()
        .map(|(locale, defined_keys)| {
            let total_used = defined_keys.intersection(used_keys).count();
            let missing_keys = if locale == reference_locale {
                check_missing_keys(defined_keys, used_keys)
            } else {
                Vec::new()
            };

            let analysis = LocaleAnalysis {
                locale: locale.to_string(),
                total_defined: defined_keys.len(),
                total_used,
                usage_percentage: percentage(total_used, defined_keys.len()),
                unused_keys: check_unused_keys(defined_keys, used_keys),
                missing_keys,
            };
            (locale.to_string(), analysis)
        })
        .collect()
}
