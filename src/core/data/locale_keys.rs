use std::collections::HashSet;

use indexmap::IndexMap;

/// Set of keys referenced by call sites across the whole source tree.
///
/// Usage is locale-agnostic: the same key applies to every locale.
pub type UsedKeySet = HashSet<String>;

/// Keys defined per locale, in the order the locales appear in the
/// definitions file.
///
/// A locale that is defined twice keeps its first position but takes the
/// key set of its last definition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleKeySet {
    locales: IndexMap<String, HashSet<String>>,
}

impl LocaleKeySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, locale: impl Into<String>, keys: HashSet<String>) {
        self.locales.insert(locale.into(), keys);
    }

    pub fn get(&self, locale: &str) -> Option<&HashSet<String>> {
        self.locales.get(locale)
    }

    /// Iterate `(locale, keys)` in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &HashSet<String>)> {
        self.locales
            .iter()
            .map(|(locale, keys)| (locale.as_str(), keys))
    }

    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.locales.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.locales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }
}

impl<L: Into<String>> FromIterator<(L, HashSet<String>)> for LocaleKeySet {
    fn from_iter<I: IntoIterator<Item = (L, HashSet<String>)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (locale, keys) in iter {
            set.insert(locale, keys);
        }
        set
    }
}
