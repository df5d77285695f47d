use indexmap::IndexMap;

/// Usage statistics for a single locale.
#[derive(Debug, Clone, PartialEq)]
pub struct LocaleAnalysis {
    pub locale: String,
    /// Number of keys defined for the locale.
    pub total_defined: usize,
    /// Number of defined keys referenced by at least one call site.
    pub total_used: usize,
    /// `total_used / total_defined * 100`, or 0 when nothing is defined.
    pub usage_percentage: f64,
    /// Defined but never referenced, sorted.
    pub unused_keys: Vec<String>,
    /// Referenced but not defined, sorted. Only filled for the reference locale.
    pub missing_keys: Vec<String>,
}

impl LocaleAnalysis {
    pub fn unused_count(&self) -> usize {
        self.unused_keys.len()
    }

    pub fn missing_count(&self) -> usize {
        self.missing_keys.len()
    }
}

/// Analysis for every locale, in definitions-file order.
pub type AllLocaleAnalysis = IndexMap<String, LocaleAnalysis>;
