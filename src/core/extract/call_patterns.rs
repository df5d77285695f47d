use std::collections::HashSet;

use anyhow::{Context, Result};
use regex::Regex;

use crate::utils::is_interpolated;

/// Quoted key argument: single or double quotes, no line breaks.
const KEY_LITERAL: &str = r#"(?:'([^'\n]+)'|"([^"\n]+)")"#;

/// Start of a Dart identifier. `\b` does not work here because `$` is an
/// identifier character in Dart but not a word character for the regex.
const NAME_START: &str = r"(?:^|[^\w$])";

/// Keys found in one file.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct FileUsages {
    pub keys: HashSet<String>,
    /// Call sites whose key literal interpolates a value (`'item_$id'`).
    pub dynamic_calls: usize,
}

/// Regexes for the two recognized lookup call shapes.
///
/// - `lookup('key')`: single argument, optional trailing comma
/// - `paramLookup('key', ...)`: the key is the first of several arguments
#[derive(Debug, Clone)]
pub struct CallPatterns {
    single: Regex,
    with_params: Regex,
}

impl CallPatterns {
    pub fn new(lookup_fn: &str, param_lookup_fn: &str) -> Result<Self> {
        let single = format!(
            r"{}{}\(\s*{}\s*,?\s*\)",
            NAME_START,
            regex::escape(lookup_fn),
            KEY_LITERAL
        );
        let with_params = format!(
            r"{}{}\(\s*{}\s*,",
            NAME_START,
            regex::escape(param_lookup_fn),
            KEY_LITERAL
        );

        Ok(Self {
            single: Regex::new(&single)
                .with_context(|| format!("Invalid lookup pattern for '{}'", lookup_fn))?,
            with_params: Regex::new(&with_params)
                .with_context(|| format!("Invalid lookup pattern for '{}'", param_lookup_fn))?,
        })
    }

    /// Collect the keys referenced in `content` by either call shape.
    pub fn extract(&self, content: &str) -> FileUsages {
        let mut usages = FileUsages::default();

        for caps in self
            .single
            .captures_iter(content)
            .chain(self.with_params.captures_iter(content))
        {
            let Some(key) = caps.get(1).or_else(|| caps.get(2)) else {
                continue;
            };
            if is_interpolated(key.as_str()) {
                usages.dynamic_calls += 1;
            } else {
                usages.keys.insert(key.as_str().to_string());
            }
        }

        usages
    }
}
