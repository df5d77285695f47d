use std::{collections::HashSet, fs, path::Path};

use anyhow::{Context, Result};

use super::literal::{TokenKind, key_at, matching_close, tokenize};
use crate::core::LocaleKeySet;

/// Read a definitions file and collect the keys of every locale block.
pub fn parse_definitions_file(path: &Path) -> Result<LocaleKeySet> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read definitions file: {:?}", path))?;
    Ok(parse_definitions(&content))
}

/// Collect `'<locale>': { ... }` blocks from a map literal.
///
/// Every string immediately followed by a colon inside a block body is a key,
/// whatever its nesting depth. Once a block is consumed the scan resumes after
/// its closing brace, so nested maps never register as locales. A block
/// without a closing brace ends the scan.
pub fn parse_definitions(source: &str) -> LocaleKeySet {
    let tokens = tokenize(source);
    let mut definitions = LocaleKeySet::new();
    let mut index = 0;

    while index < tokens.len() {
        let Some(locale) = key_at(&tokens, index) else {
            index += 1;
            continue;
        };

        let open = index + 2;
        if !matches!(tokens.get(open), Some(t) if t.kind == TokenKind::OpenBrace) {
            index += 1;
            continue;
        }

        let Some(close) = matching_close(&tokens, open) else {
            break;
        };

        let keys: HashSet<String> = (open + 1..close)
            .filter_map(|i| key_at(&tokens, i))
            .map(str::to_string)
            .collect();
        definitions.insert(locale, keys);

        index = close + 1;
    }

    definitions
}
