//! Markdown usage report.
//!
//! Rendering is separate from writing so the document can be produced (and
//! tested) without touching the filesystem. Identical input always renders to
//! identical bytes: locales keep definitions-file order and key lists are
//! already sorted by the rules.

use std::{fmt::Write as _, fs, path::Path};

use anyhow::{Context, Result};

use crate::{
    config::{LocaleNames, locale_display_name},
    core::{AllLocaleAnalysis, UsedKeySet},
};

pub const REPORT_TITLE: &str = "Text Usage Report";

/// Render the analysis as a markdown document.
pub fn render_report(
    analysis: &AllLocaleAnalysis,
    used_keys: &UsedKeySet,
    locale_names: &LocaleNames,
) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "# {}\n", REPORT_TITLE);
    let _ = writeln!(out, "## Summary");
    let _ = writeln!(out, "- Keys used in code: {}\n", used_keys.len());

    for (locale, data) in analysis {
        let _ = writeln!(
            out,
            "## {} ({})",
            locale_display_name(locale_names, locale),
            locale
        );
        let _ = writeln!(out, "- Defined keys: {}", data.total_defined);
        let _ = writeln!(out, "- Used keys: {}", data.total_used);
        let _ = writeln!(out, "- Usage: {:.1}%\n", data.usage_percentage);

        write_key_section(&mut out, "Unused keys", &data.unused_keys);
        write_key_section(&mut out, "Missing keys", &data.missing_keys);
    }

    out
}

fn write_key_section(out: &mut String, title: &str, keys: &[String]) {
    if keys.is_empty() {
        return;
    }
    let _ = writeln!(out, "### {} ({})", title, keys.len());
    for key in keys {
        let _ = writeln!(out, "- `{}`", key);
    }
    let _ = writeln!(out);
}

/// Render the report and write it to `path`, replacing any existing file.
pub fn write_report(
    path: &Path,
    analysis: &AllLocaleAnalysis,
    used_keys: &UsedKeySet,
    locale_names: &LocaleNames,
) -> Result<()> {
    let content = render_report(analysis, used_keys, locale_names);
    fs::write(path, content).with_context(|| format!("Failed to write report: {:?}", path))
}
